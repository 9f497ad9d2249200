//! gradebook-core — Student roster, grade storage and averages.
//!
//! This crate holds the in-memory data model the `gradebook` binary drives:
//! students with per-subject grades, the roster that owns them, and the
//! formatting used to display their records.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod roster;
pub mod statistics;
