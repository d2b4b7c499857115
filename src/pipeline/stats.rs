// src/pipeline/stats.rs

//! Statistics over every department.

use std::io::Write;

use crate::error::Result;
use crate::pipeline::write_json;
use crate::services::ExamService;

/// Aggregate and print exam statistics.
pub async fn run_stats(service: &ExamService, out: &mut dyn Write) -> Result<()> {
    log::info!(
        "Aggregating statistics over {} departments",
        service.departments().len()
    );
    let stats = service.get_stats().await?;
    if stats.unknown_students > 0 {
        log::warn!(
            "{} exams have no readable student count and were left out of the totals",
            stats.unknown_students
        );
    }
    write_json(out, &stats)
}
