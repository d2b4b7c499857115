//! Service layer for the exam schedule pipeline.
//!
//! This module contains the business logic for:
//! - Fragment fetching (`FragmentFetcher`)
//! - Fragment parsing (`ScheduleParser`)
//! - Read-through caching (`ScheduleCache`)
//! - Lookups, statistics and cache clearing (`ExamService`)

mod cache;
mod exams;
mod fetcher;
mod parser;

pub use cache::ScheduleCache;
pub use exams::ExamService;
pub use fetcher::FragmentFetcher;
pub use parser::ScheduleParser;
