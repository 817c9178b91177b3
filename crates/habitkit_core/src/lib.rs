//! Core domain logic for HabitKit.
//! This crate is the single source of truth for streak and analytics
//! invariants; storage and presentation layers build on top of it.

pub mod analytics;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use analytics::{
    current_streak, find_struggling_habits, habits_by_periodicity, longest_streak,
    longest_streak_across_all, unique_completion_dates, unique_iso_weeks, AnalyticsError,
    MissedCompletion,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{Habit, HabitValidationError, Schedule};
pub use repo::habit_repo::{HabitRepository, RepoError, RepoResult, SqliteHabitRepository};
pub use service::habit_service::{HabitService, ServiceError, ServiceResult};
pub use service::seed::seed_example_habits;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
