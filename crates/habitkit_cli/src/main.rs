//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the core crate end to end: open a store, seed example data,
//!   print a streak report.
//! - Keep output plain so it doubles as a quick local sanity check.

use chrono::Local;
use habitkit_core::db::open_db_in_memory;
use habitkit_core::{
    find_struggling_habits, seed_example_habits, HabitService, SqliteHabitRepository,
};
use std::collections::HashMap;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("habitkit: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let now = Local::now().naive_local();
    let today = now.date();

    let conn = open_db_in_memory().map_err(|err| err.to_string())?;
    let service = HabitService::new(SqliteHabitRepository::new(&conn));
    seed_example_habits(&service, now).map_err(|err| err.to_string())?;

    println!("habitkit_core version={}", habitkit_core::core_version());
    println!();
    println!("{:<16} {:<8} {:>8} {:>8}", "habit", "schedule", "current", "longest");

    let habits = service.all_habits().map_err(|err| err.to_string())?;
    let mut completions_by_habit = HashMap::new();
    for habit in &habits {
        let current = service
            .current_streak(&habit.name, today)
            .map_err(|err| err.to_string())?;
        let longest = service
            .longest_streak(&habit.name)
            .map_err(|err| err.to_string())?;
        println!(
            "{:<16} {:<8} {:>8} {:>8}",
            habit.name,
            habit.schedule.as_str(),
            current,
            longest
        );

        let completions = service
            .completions(&habit.name)
            .map_err(|err| err.to_string())?;
        completions_by_habit.insert(habit.name.clone(), completions);
    }

    println!();
    println!("most missed over the last 30 days:");
    for entry in find_struggling_habits(&habits, &completions_by_habit, None, None, today) {
        println!("  {:<16} missed={}", entry.habit, entry.missed);
    }

    Ok(())
}
