//! Pipeline entry points for schedule operations.
//!
//! - `run_departments`: List the department registry
//! - `run_tests`: Load one department's schedule
//! - `run_stats`: Aggregate statistics over every department
//! - `run_clear_cache`: Drop every cached schedule
//! - `run_validate`: Check configuration

pub mod clear;
pub mod schedule;
pub mod service;
pub mod stats;
pub mod validate;

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

pub use clear::run_clear_cache;
pub use schedule::{run_departments, run_tests};
pub use service::{build_service, open_store};
pub use stats::run_stats;
pub use validate::run_validate;

/// Write a value as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
