// src/lib.rs

//! proftafla: fetches, parses, caches and summarises the University of
//! Iceland exam schedule, one HTML fragment per department.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::{DepartmentSchedule, Stats, departments};
pub use services::ExamService;
