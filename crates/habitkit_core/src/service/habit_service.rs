//! Habit use-case service.
//!
//! # Responsibility
//! - Provide CRUD and completion-logging entry points for callers.
//! - Surface habit-not-found as a semantic error before persistence runs.
//! - Bridge stored completion history into the analytics functions.
//!
//! # Invariants
//! - Every timestamp and reference date is injected by the caller; the
//!   service never reads the wall clock.
//! - `HabitNotFound` is raised by existence checks here, not synthesized
//!   from SQL errors.

use crate::analytics;
use crate::model::habit::{Habit, Schedule};
use crate::repo::habit_repo::{HabitRepository, RepoError};
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from service-level orchestration.
#[derive(Debug)]
pub enum ServiceError {
    /// No habit with this name exists.
    HabitNotFound(String),
    /// A date range query had its end before its start.
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HabitNotFound(name) => write!(f, "habit not found: {name}"),
            Self::InvalidPeriod { start, end } => {
                write!(f, "invalid period: end {end} is before start {start}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::HabitNotFound(_) | Self::InvalidPeriod { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper over a habit repository.
pub struct HabitService<R: HabitRepository> {
    repo: R,
}

impl<R: HabitRepository> HabitService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new habit.
    ///
    /// # Errors
    /// - Validation errors for blank names.
    /// - `RepoError::Duplicate` (wrapped) when the name is taken.
    pub fn add_habit(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: Schedule,
        created_on: NaiveDateTime,
    ) -> ServiceResult<()> {
        let habit = Habit::new(name, description, schedule, created_on);
        self.repo.create_habit(&habit)?;
        info!(
            "event=habit_add module=service status=ok name={} schedule={}",
            habit.name,
            habit.schedule.as_str()
        );
        Ok(())
    }

    /// Gets a habit by name, `None` when it does not exist.
    pub fn get_habit(&self, name: &str) -> ServiceResult<Option<Habit>> {
        Ok(self.repo.get_habit(name)?)
    }

    /// Lists all habits, newest first.
    pub fn all_habits(&self) -> ServiceResult<Vec<Habit>> {
        Ok(self.repo.list_habits()?)
    }

    /// Deletes a habit and, via cascade, its completion history.
    ///
    /// Returns `true` when a habit was actually removed.
    pub fn delete_habit(&self, name: &str) -> ServiceResult<bool> {
        let deleted = self.repo.delete_habit(name)?;
        info!("event=habit_delete module=service status=ok name={name} deleted={deleted}");
        Ok(deleted)
    }

    /// Records a completion for an existing habit.
    ///
    /// # Errors
    /// - `HabitNotFound` when no habit with this name exists.
    pub fn log_completion(&self, name: &str, completed_on: NaiveDateTime) -> ServiceResult<()> {
        self.require_habit(name)?;
        self.repo.log_completion(name, completed_on)?;
        info!("event=completion_log module=service status=ok name={name}");
        Ok(())
    }

    /// Returns all completion timestamps for an existing habit.
    pub fn completions(&self, name: &str) -> ServiceResult<Vec<NaiveDateTime>> {
        self.require_habit(name)?;
        Ok(self.repo.completions(name)?)
    }

    /// Returns completions whose date falls within `[start, end]` inclusive.
    ///
    /// # Errors
    /// - `InvalidPeriod` when `end < start`.
    /// - `HabitNotFound` when no habit with this name exists.
    pub fn completions_in_range(
        &self,
        name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<Vec<NaiveDateTime>> {
        if end < start {
            return Err(ServiceError::InvalidPeriod { start, end });
        }
        self.require_habit(name)?;
        Ok(self.repo.completions_in_range(name, start, end)?)
    }

    /// Current streak for an existing habit, relative to `today`.
    pub fn current_streak(&self, name: &str, today: NaiveDate) -> ServiceResult<u32> {
        let habit = self.require_habit(name)?;
        let completions = self.repo.completions(name)?;
        Ok(analytics::current_streak(
            &completions,
            habit.schedule,
            today,
        ))
    }

    /// Longest streak ever recorded for an existing habit.
    pub fn longest_streak(&self, name: &str) -> ServiceResult<u32> {
        let habit = self.require_habit(name)?;
        let completions = self.repo.completions(name)?;
        Ok(analytics::longest_streak(&completions, habit.schedule))
    }

    fn require_habit(&self, name: &str) -> ServiceResult<Habit> {
        self.repo
            .get_habit(name)?
            .ok_or_else(|| ServiceError::HabitNotFound(name.to_string()))
    }
}
