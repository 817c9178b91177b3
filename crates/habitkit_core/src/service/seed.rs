//! Example-data seeding for first runs and demos.
//!
//! The completion pattern is deterministic relative to the injected `now`:
//! daily habits get most of the past four weeks with a couple of recurring
//! gaps, the weekly habit gets the four most recent Mondays.

use crate::model::habit::Schedule;
use crate::repo::habit_repo::HabitRepository;
use crate::service::habit_service::{HabitService, ServiceResult};
use chrono::{Datelike, Duration, NaiveDateTime};
use log::info;

const EXAMPLE_HABITS: &[(&str, &str, Schedule)] = &[
    ("Drink Water", "Drink 8 glasses daily", Schedule::Daily),
    ("Exercise", "30 minutes workout", Schedule::Daily),
    ("Read", "Read for 20 minutes", Schedule::Daily),
    ("Meditate", "10 minutes mindfulness", Schedule::Daily),
    ("Weekly Review", "Review goals and progress", Schedule::Weekly),
];

/// Seeds the example habits with completion history.
///
/// Habits that already exist are left untouched, so seeding an already
/// populated store is a no-op. Returns the number of habits created.
pub fn seed_example_habits<R: HabitRepository>(
    service: &HabitService<R>,
    now: NaiveDateTime,
) -> ServiceResult<usize> {
    let mut seeded = 0;
    for &(name, description, schedule) in EXAMPLE_HABITS {
        if service.get_habit(name)?.is_some() {
            continue;
        }

        service.add_habit(name, description, schedule, now)?;
        for completed_on in example_completions(schedule, now) {
            service.log_completion(name, completed_on)?;
        }
        seeded += 1;
    }

    info!("event=seed_examples module=service status=ok seeded={seeded}");
    Ok(seeded)
}

fn example_completions(schedule: Schedule, now: NaiveDateTime) -> Vec<NaiveDateTime> {
    match schedule {
        // Four weeks back, skipping a couple of recurring offsets so the
        // demo data contains realistic gaps.
        Schedule::Daily => (0..28)
            .filter(|offset| offset % 7 != 3 && offset % 11 != 5)
            .map(|offset| now - Duration::days(offset))
            .collect(),
        Schedule::Weekly => {
            let days_since_monday = i64::from(now.date().weekday().num_days_from_monday());
            let last_monday = now - Duration::days(days_since_monday);
            (0..4)
                .map(|weeks_back| last_monday - Duration::weeks(weeks_back))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::example_completions;
    use crate::model::habit::Schedule;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn daily_pattern_skips_recurring_offsets() {
        let completions = example_completions(Schedule::Daily, now());
        // 28 offsets minus {3, 10, 17, 24} (x % 7 == 3) and {5, 16, 27}
        // (x % 11 == 5); no overlap between the two sets.
        assert_eq!(completions.len(), 21);
    }

    #[test]
    fn weekly_pattern_lands_on_mondays() {
        let completions = example_completions(Schedule::Weekly, now());
        assert_eq!(completions.len(), 4);
        for timestamp in completions {
            assert_eq!(timestamp.date().weekday(), Weekday::Mon);
        }
    }
}
