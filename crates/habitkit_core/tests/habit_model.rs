use chrono::NaiveDate;
use habitkit_core::{Habit, HabitValidationError, Schedule};

#[test]
fn blank_names_fail_validation() {
    let habit = Habit::new("  ", "", Schedule::Daily, created());
    assert_eq!(habit.validate(), Err(HabitValidationError::EmptyName));

    let habit = Habit::new("Read", "", Schedule::Daily, created());
    assert_eq!(habit.validate(), Ok(()));
}

#[test]
fn schedule_tags_roundtrip_through_text() {
    assert_eq!(Schedule::Daily.as_str(), "daily");
    assert_eq!(Schedule::Weekly.as_str(), "weekly");
    assert_eq!(Schedule::parse("daily"), Some(Schedule::Daily));
    assert_eq!(Schedule::parse("weekly"), Some(Schedule::Weekly));
}

#[test]
fn unknown_schedule_tags_do_not_parse() {
    assert_eq!(Schedule::parse("monthly"), None);
    assert_eq!(Schedule::parse("Daily"), None);
    assert_eq!(Schedule::parse(""), None);
}

#[test]
fn display_includes_description_only_when_present() {
    let habit = Habit::new("Test", "A habit", Schedule::Daily, created());
    assert_eq!(habit.to_string(), "Test (daily): A habit");

    let habit = Habit::new("Solo", "", Schedule::Weekly, created());
    assert_eq!(habit.to_string(), "Solo (weekly)");
}

#[test]
fn habit_serializes_with_snake_case_schedule() {
    let habit = Habit::new("Read", "Read for 20 minutes", Schedule::Weekly, created());

    let json = serde_json::to_value(&habit).unwrap();
    assert_eq!(json["schedule"], "weekly");
    assert_eq!(json["name"], "Read");

    let back: Habit = serde_json::from_value(json).unwrap();
    assert_eq!(back, habit);
}

fn created() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}
