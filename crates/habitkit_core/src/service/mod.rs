//! Use-case orchestration over habit persistence.
//!
//! # Responsibility
//! - Provide stable entry points for presentation layers.
//! - Enforce habit-existence and period checks before touching storage.
//!
//! # Invariants
//! - Services never bypass repository validation contracts.
//! - Services remain storage-agnostic behind `HabitRepository`.

pub mod habit_service;
pub mod seed;
