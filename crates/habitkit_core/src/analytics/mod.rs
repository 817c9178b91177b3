//! Streak and completion analytics.
//!
//! # Responsibility
//! - Normalize completion timestamps into calendar units (days/ISO weeks).
//! - Compute current and longest consecutive-completion streaks.
//! - Rank habits by missed completions over a period.
//!
//! # Invariants
//! - Every function is pure: the reference date ("today") is an explicit
//!   parameter, never read from the wall clock.
//! - Calendar-unit sequences are always deduplicated and sorted before any
//!   gap walk.
//! - An unrecognized schedule tag fails loudly; there is no default.

use crate::model::habit::{Habit, Schedule};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod streaks;
mod struggling;

pub use streaks::{current_streak, longest_streak, unique_completion_dates, unique_iso_weeks};
pub use struggling::{find_struggling_habits, MissedCompletion};

/// Errors from analytics entry points that accept textual input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The schedule tag was neither `daily` nor `weekly`.
    InvalidSchedule(String),
}

impl Display for AnalyticsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSchedule(tag) => {
                write!(f, "invalid schedule `{tag}`; expected daily|weekly")
            }
        }
    }
}

impl Error for AnalyticsError {}

/// Filters habits by schedule tag.
///
/// The tag is textual because it typically arrives from a presentation
/// layer; parsing here keeps the invalid-schedule failure at the boundary.
///
/// # Errors
/// - `InvalidSchedule` when `tag` is not exactly `daily` or `weekly`.
pub fn habits_by_periodicity<'a>(
    habits: &'a [Habit],
    tag: &str,
) -> Result<Vec<&'a Habit>, AnalyticsError> {
    let schedule =
        Schedule::parse(tag).ok_or_else(|| AnalyticsError::InvalidSchedule(tag.to_string()))?;
    Ok(habits
        .iter()
        .filter(|habit| habit.schedule == schedule)
        .collect())
}

/// Returns the maximum longest streak across all habits.
///
/// Habits missing from the completions map count as zero-length history.
/// Returns 0 for an empty habit list.
pub fn longest_streak_across_all(
    habits: &[Habit],
    completions_by_habit: &HashMap<String, Vec<NaiveDateTime>>,
) -> u32 {
    habits
        .iter()
        .map(|habit| {
            let completions = completions_by_habit
                .get(&habit.name)
                .map_or(&[][..], Vec::as_slice);
            longest_streak(completions, habit.schedule)
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::habits_by_periodicity;
    use super::AnalyticsError;

    #[test]
    fn periodicity_filter_rejects_unknown_tag() {
        let err = habits_by_periodicity(&[], "monthly").unwrap_err();
        assert_eq!(err, AnalyticsError::InvalidSchedule("monthly".to_string()));
    }

    #[test]
    fn periodicity_filter_accepts_both_known_tags() {
        assert!(habits_by_periodicity(&[], "daily").unwrap().is_empty());
        assert!(habits_by_periodicity(&[], "weekly").unwrap().is_empty());
    }
}
