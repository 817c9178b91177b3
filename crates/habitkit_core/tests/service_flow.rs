use chrono::{NaiveDate, NaiveDateTime};
use habitkit_core::db::open_db_in_memory;
use habitkit_core::{
    seed_example_habits, HabitService, Schedule, ServiceError, SqliteHabitRepository,
};

#[test]
fn add_then_get_habit() {
    let conn = open_db_in_memory().unwrap();
    let service = HabitService::new(SqliteHabitRepository::new(&conn));

    service
        .add_habit("Exercise", "30 minutes workout", Schedule::Daily, at(2025, 3, 1))
        .unwrap();

    let habit = service.get_habit("Exercise").unwrap().unwrap();
    assert_eq!(habit.schedule, Schedule::Daily);
    assert_eq!(habit.description, "30 minutes workout");
}

#[test]
fn logging_completion_for_missing_habit_is_habit_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = HabitService::new(SqliteHabitRepository::new(&conn));

    let err = service.log_completion("Ghost", at(2025, 3, 2)).unwrap_err();
    assert!(matches!(err, ServiceError::HabitNotFound(name) if name == "Ghost"));
}

#[test]
fn completions_for_missing_habit_is_habit_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = HabitService::new(SqliteHabitRepository::new(&conn));

    let err = service.completions("Ghost").unwrap_err();
    assert!(matches!(err, ServiceError::HabitNotFound(_)));
}

#[test]
fn range_query_rejects_end_before_start() {
    let conn = open_db_in_memory().unwrap();
    let service = HabitService::new(SqliteHabitRepository::new(&conn));

    service
        .add_habit("Read", "", Schedule::Daily, at(2025, 3, 1))
        .unwrap();

    let err = service
        .completions_in_range("Read", day(2025, 3, 10), day(2025, 3, 4))
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidPeriod { .. }));
}

#[test]
fn streaks_flow_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let service = HabitService::new(SqliteHabitRepository::new(&conn));

    service
        .add_habit("Read", "", Schedule::Daily, at(2025, 3, 1))
        .unwrap();
    for d in 8..=10 {
        service.log_completion("Read", at(2025, 3, d)).unwrap();
    }
    // An older, disconnected completion that must not extend the run.
    service.log_completion("Read", at(2025, 3, 5)).unwrap();

    assert_eq!(service.current_streak("Read", day(2025, 3, 10)).unwrap(), 3);
    assert_eq!(service.longest_streak("Read").unwrap(), 3);
    assert_eq!(service.current_streak("Read", day(2025, 3, 20)).unwrap(), 0);
}

#[test]
fn seeding_creates_examples_once() {
    let conn = open_db_in_memory().unwrap();
    let service = HabitService::new(SqliteHabitRepository::new(&conn));
    let now = at(2025, 3, 12);

    assert_eq!(seed_example_habits(&service, now).unwrap(), 5);
    assert_eq!(seed_example_habits(&service, now).unwrap(), 0);

    let habits = service.all_habits().unwrap();
    assert_eq!(habits.len(), 5);

    let review = service.get_habit("Weekly Review").unwrap().unwrap();
    assert_eq!(review.schedule, Schedule::Weekly);
    // Four Mondays of history.
    assert_eq!(service.completions("Weekly Review").unwrap().len(), 4);
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(9, 0, 0).unwrap()
}
