//! Missed-completion ranking over a reporting period.

use crate::model::habit::{Habit, Schedule};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// How many expected completions a habit missed within a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedCompletion {
    /// Habit name, as supplied in the input list.
    pub habit: String,
    /// Expected completions minus actual, floored at zero.
    pub missed: u32,
}

/// Ranks habits by missed completions within `[period_start, period_end]`,
/// both bounds inclusive.
///
/// Defaults: `period_end` falls back to `today`, `period_start` to thirty
/// days before the effective end. Expected completions are one per day for
/// daily habits and `days / 7 + 1` for weekly habits, where `days` is the
/// inclusive day span of the period.
///
/// The result is sorted descending by missed count; the sort is stable, so
/// ties keep the input order. Habits absent from the completions map count
/// zero actual completions.
pub fn find_struggling_habits(
    habits: &[Habit],
    completions_by_habit: &HashMap<String, Vec<NaiveDateTime>>,
    period_start: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<MissedCompletion> {
    if habits.is_empty() {
        return Vec::new();
    }

    let end = period_end.unwrap_or(today);
    let start = period_start.unwrap_or_else(|| end - Duration::days(30));
    let days = (end - start).num_days() + 1;

    let mut ranked: Vec<MissedCompletion> = habits
        .iter()
        .map(|habit| {
            let actual = completions_by_habit
                .get(&habit.name)
                .map_or(0, |completions| {
                    completions
                        .iter()
                        .filter(|timestamp| {
                            let date = timestamp.date();
                            start <= date && date <= end
                        })
                        .count()
                }) as i64;
            let expected = match habit.schedule {
                Schedule::Daily => days,
                Schedule::Weekly => days / 7 + 1,
            };
            MissedCompletion {
                habit: habit.name.clone(),
                missed: (expected - actual).max(0) as u32,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.missed.cmp(&a.missed));
    ranked
}
