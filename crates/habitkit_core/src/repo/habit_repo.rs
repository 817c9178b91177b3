//! Habit repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `habits` and `completions` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Habit::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state (unknown schedule tags)
//!   instead of masking it with a default.
//! - Completion queries return timestamps newest first; the analytics layer
//!   re-sorts regardless.

use crate::db::DbError;
use crate::model::habit::{Habit, HabitValidationError, Schedule};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const HABIT_SELECT_SQL: &str = "SELECT
    name,
    description,
    schedule,
    created_on
FROM habits";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for habit persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(HabitValidationError),
    Db(DbError),
    /// A habit with this name already exists.
    Duplicate(String),
    /// No habit with this name exists.
    NotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Duplicate(name) => write!(f, "habit already exists: {name}"),
            Self::NotFound(name) => write!(f, "habit not found: {name}"),
            Self::InvalidData(message) => write!(f, "invalid persisted habit data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Duplicate(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<HabitValidationError> for RepoError {
    fn from(value: HabitValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for habit CRUD and completion history.
pub trait HabitRepository {
    fn create_habit(&self, habit: &Habit) -> RepoResult<()>;
    fn get_habit(&self, name: &str) -> RepoResult<Option<Habit>>;
    fn list_habits(&self) -> RepoResult<Vec<Habit>>;
    fn delete_habit(&self, name: &str) -> RepoResult<bool>;
    fn log_completion(&self, habit_name: &str, completed_on: NaiveDateTime) -> RepoResult<i64>;
    fn completions(&self, habit_name: &str) -> RepoResult<Vec<NaiveDateTime>>;
    fn completions_in_range(
        &self,
        habit_name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<NaiveDateTime>>;
}

/// SQLite-backed habit repository.
pub struct SqliteHabitRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHabitRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl HabitRepository for SqliteHabitRepository<'_> {
    fn create_habit(&self, habit: &Habit) -> RepoResult<()> {
        habit.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO habits (name, description, schedule, created_on)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                habit.name.as_str(),
                habit.description.as_str(),
                habit.schedule.as_str(),
                habit.created_on,
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            // Only `habits.name` carries a uniqueness constraint.
            Err(err) if is_constraint_violation(&err) => {
                Err(RepoError::Duplicate(habit.name.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_habit(&self, name: &str) -> RepoResult<Option<Habit>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{HABIT_SELECT_SQL} WHERE name = ?1;"))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_habit_row(row)?));
        }

        Ok(None)
    }

    fn list_habits(&self) -> RepoResult<Vec<Habit>> {
        let mut stmt = self.conn.prepare(&format!(
            "{HABIT_SELECT_SQL} ORDER BY created_on DESC, name ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut habits = Vec::new();
        while let Some(row) = rows.next()? {
            habits.push(parse_habit_row(row)?);
        }

        Ok(habits)
    }

    fn delete_habit(&self, name: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM habits WHERE name = ?1;", [name])?;
        Ok(changed > 0)
    }

    fn log_completion(&self, habit_name: &str, completed_on: NaiveDateTime) -> RepoResult<i64> {
        let inserted = self.conn.execute(
            "INSERT INTO completions (habit_name, completed_on) VALUES (?1, ?2);",
            params![habit_name, completed_on],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            // The only constraint here is the foreign key on habit_name.
            Err(err) if is_constraint_violation(&err) => {
                Err(RepoError::NotFound(habit_name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn completions(&self, habit_name: &str) -> RepoResult<Vec<NaiveDateTime>> {
        let mut stmt = self.conn.prepare(
            "SELECT completed_on FROM completions
             WHERE habit_name = ?1
             ORDER BY completed_on DESC;",
        )?;

        let mut rows = stmt.query([habit_name])?;
        let mut timestamps = Vec::new();
        while let Some(row) = rows.next()? {
            timestamps.push(row.get("completed_on")?);
        }

        Ok(timestamps)
    }

    fn completions_in_range(
        &self,
        habit_name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<NaiveDateTime>> {
        let mut stmt = self.conn.prepare(
            "SELECT completed_on FROM completions
             WHERE habit_name = ?1
               AND date(completed_on) BETWEEN ?2 AND ?3
             ORDER BY completed_on DESC;",
        )?;

        let mut rows = stmt.query(params![habit_name, start, end])?;
        let mut timestamps = Vec::new();
        while let Some(row) = rows.next()? {
            timestamps.push(row.get("completed_on")?);
        }

        Ok(timestamps)
    }
}

fn parse_habit_row(row: &Row<'_>) -> RepoResult<Habit> {
    let schedule_text: String = row.get("schedule")?;
    let schedule = Schedule::parse(&schedule_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid schedule `{schedule_text}` in habits.schedule"
        ))
    })?;

    Ok(Habit {
        name: row.get("name")?,
        description: row.get("description")?,
        schedule,
        created_on: row.get("created_on")?,
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
