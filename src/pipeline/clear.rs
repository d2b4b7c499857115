// src/pipeline/clear.rs

//! Cache clearing.

use crate::error::{AppError, Result};
use crate::services::ExamService;

/// Clear every cached schedule, failing if the clear could not be verified.
pub async fn run_clear_cache(service: &ExamService) -> Result<()> {
    if service.clear_cache().await {
        log::info!("Schedule cache cleared");
        Ok(())
    } else {
        Err(AppError::cache("schedule cache could not be cleared"))
    }
}
