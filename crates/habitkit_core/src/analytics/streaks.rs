//! Current and longest streak computation.
//!
//! # Responsibility
//! - Collapse completion timestamps to unique calendar units.
//! - Walk the unit sequence for consecutive runs under both schedules.
//!
//! # Invariants
//! - Multiple completions on one calendar day count as one unit.
//! - Results are never negative; a non-empty qualifying history yields >= 1.
//! - Weekly runs require the same ISO year and a week-number gap of exactly
//!   one. A week-52/53 to week-1 transition therefore breaks the run; this
//!   matches the shipped behavior and is covered by tests.

use crate::model::habit::Schedule;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

/// Collapses timestamps to unique calendar dates, sorted ascending.
///
/// Time-of-day is dropped; duplicate dates are removed.
pub fn unique_completion_dates(timestamps: &[NaiveDateTime]) -> Vec<NaiveDate> {
    timestamps
        .iter()
        .map(NaiveDateTime::date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Collapses timestamps to unique ISO (year, week) pairs, sorted ascending.
pub fn unique_iso_weeks(timestamps: &[NaiveDateTime]) -> Vec<(i32, u32)> {
    timestamps
        .iter()
        .map(|timestamp| {
            let week = timestamp.date().iso_week();
            (week.year(), week.week())
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Counts the run of consecutive calendar units ending at (or adjacent to)
/// `today`.
///
/// Daily: the streak is alive while the most recent completion date is today
/// or yesterday; it then extends backward one unit per exactly-one-day gap.
/// Weekly: the streak is alive while the most recent completion date is at
/// most seven days old; it then extends backward one unit per consecutive
/// ISO week within the same ISO year.
///
/// Returns 0 for an empty history or a broken streak.
pub fn current_streak(timestamps: &[NaiveDateTime], schedule: Schedule, today: NaiveDate) -> u32 {
    let mut dates = unique_completion_dates(timestamps);
    dates.reverse();
    let Some(&most_recent) = dates.first() else {
        return 0;
    };

    match schedule {
        Schedule::Daily => {
            if most_recent < today - Duration::days(1) {
                return 0;
            }
            let mut streak = 1;
            for pair in dates.windows(2) {
                if (pair[0] - pair[1]).num_days() == 1 {
                    streak += 1;
                } else {
                    break;
                }
            }
            streak
        }
        Schedule::Weekly => {
            if (today - most_recent).num_days() > 7 {
                return 0;
            }
            let mut weeks = unique_iso_weeks(timestamps);
            weeks.reverse();
            let mut streak = 1;
            for pair in weeks.windows(2) {
                let (later_year, later_week) = pair[0];
                let (earlier_year, earlier_week) = pair[1];
                if later_year == earlier_year && later_week - earlier_week == 1 {
                    streak += 1;
                } else {
                    break;
                }
            }
            streak
        }
    }
}

/// Finds the longest consecutive run anywhere in the completion history,
/// ignoring recency.
///
/// Returns 0 only for an empty history; any completion yields at least 1.
pub fn longest_streak(timestamps: &[NaiveDateTime], schedule: Schedule) -> u32 {
    match schedule {
        Schedule::Daily => {
            let dates = unique_completion_dates(timestamps);
            if dates.is_empty() {
                return 0;
            }
            let mut longest = 1;
            let mut run = 1;
            for pair in dates.windows(2) {
                if (pair[1] - pair[0]).num_days() == 1 {
                    run += 1;
                    longest = longest.max(run);
                } else {
                    run = 1;
                }
            }
            longest
        }
        Schedule::Weekly => {
            let weeks = unique_iso_weeks(timestamps);
            if weeks.is_empty() {
                return 0;
            }
            let mut longest = 1;
            let mut run = 1;
            for pair in weeks.windows(2) {
                let (earlier_year, earlier_week) = pair[0];
                let (later_year, later_week) = pair[1];
                if earlier_year == later_year && later_week - earlier_week == 1 {
                    run += 1;
                    longest = longest.max(run);
                } else {
                    run = 1;
                }
            }
            longest
        }
    }
}
