//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for habits and
//!   completions.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Habit::validate()` before persistence.
//! - Repository APIs return semantic errors (`Duplicate`, `NotFound`) in
//!   addition to DB transport errors.

pub mod habit_repo;
