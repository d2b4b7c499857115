// src/models/mod.rs

//! Domain models for the exam schedule pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
pub mod department;
mod schedule;
mod selectors;
mod stats;

// Re-export all public types
pub use config::{CacheBackend, CacheConfig, Config, LoggingConfig, UpstreamConfig};
pub use department::{Department, Resolved, departments};
pub use schedule::{COLUMNS, Column, DepartmentSchedule, ExamRow, SubdivisionListing};
pub use selectors::ScheduleSelectors;
pub use stats::Stats;
