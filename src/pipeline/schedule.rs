// src/pipeline/schedule.rs

//! Department listing and schedule lookup.

use std::io::Write;

use crate::error::Result;
use crate::pipeline::write_json;
use crate::services::ExamService;

/// Print the department registry.
pub fn run_departments(service: &ExamService, out: &mut dyn Write) -> Result<()> {
    write_json(out, service.departments())
}

/// Load and print the schedule of one department.
pub async fn run_tests(service: &ExamService, slug: &str, out: &mut dyn Write) -> Result<()> {
    log::info!("Loading exam schedule for {}", slug);
    let schedule = service.get_tests(slug).await?;
    log::info!(
        "{} listings, {} exams",
        schedule.listings().len(),
        schedule.row_count()
    );
    write_json(out, &schedule)
}
