//! Domain model for habits and their recurrence schedules.
//!
//! # Responsibility
//! - Define the canonical habit record used by analytics and persistence.
//! - Keep schedule tags closed to exactly the two supported values.
//!
//! # Invariants
//! - A habit is identified by its `name`; names are unique in storage.
//! - `Schedule` has exactly two variants; unknown textual tags are rejected
//!   at every boundary where text enters, never defaulted.

pub mod habit;
