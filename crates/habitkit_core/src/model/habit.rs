//! Habit domain model.
//!
//! # Responsibility
//! - Define the habit record shared by analytics, repository and service.
//! - Provide validation for caller-supplied habit data.
//!
//! # Invariants
//! - `name` is the stable identifier; storage enforces uniqueness on it.
//! - `schedule` is always one of the two supported recurrence tags.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Recurrence schedule of a habit.
///
/// Determines the unit of "consecutive" for streak math: calendar days for
/// `Daily`, ISO calendar weeks for `Weekly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    /// Expected once per calendar day.
    Daily,
    /// Expected once per ISO calendar week.
    Weekly,
}

impl Schedule {
    /// Canonical textual tag, as persisted and as accepted by filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Parses a textual tag. Returns `None` for anything that is not
    /// exactly `daily` or `weekly`; callers turn that into their layer's
    /// invalid-schedule error instead of falling back to a default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}

/// A recurring habit tracked by the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique habit name, used as the storage key and the analytics
    /// identifier.
    pub name: String,
    /// Free-form description shown to the user.
    pub description: String,
    /// Recurrence schedule driving streak and expectation math.
    pub schedule: Schedule,
    /// When the habit was created. Injected by the caller, not wall-clock.
    pub created_on: NaiveDateTime,
}

impl Habit {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: Schedule,
        created_on: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule,
            created_on,
        }
    }

    /// Checks caller-supplied fields before persistence.
    ///
    /// # Errors
    /// - `EmptyName` when the name is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        if self.name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        Ok(())
    }
}

impl Display for Habit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} ({})", self.name, self.schedule.as_str())
        } else {
            write!(
                f,
                "{} ({}): {}",
                self.name,
                self.schedule.as_str(),
                self.description
            )
        }
    }
}

/// Validation failures for habit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitValidationError {
    EmptyName,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "habit name cannot be empty"),
        }
    }
}

impl Error for HabitValidationError {}
