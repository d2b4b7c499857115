// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and report the effective settings.
pub fn run_validate(config: &Config) -> Result<()> {
    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    log::info!("Config OK");
    log::info!("    upstream: {}", config.upstream.base_url);
    log::info!(
        "    timetable: sid={} proftaflaID={} draft={}",
        config.upstream.sid,
        config.upstream.schedule_id,
        config.upstream.use_work_table
    );
    log::info!("    timeout: {}s", config.upstream.timeout_secs);
    log::info!(
        "    cache: {:?} ({})",
        config.cache.backend,
        config.cache.dir.display()
    );
    Ok(())
}
