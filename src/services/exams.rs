// src/services/exams.rs

//! Exam schedule service.
//!
//! Ties the registry, fetcher, parser and cache together and reduces every
//! department's schedule into [`Stats`].

use std::sync::Arc;

use futures::future::join_all;

use crate::error::Result;
use crate::models::department::{self, Department};
use crate::models::{Config, DepartmentSchedule, Stats};
use crate::services::{FragmentFetcher, ScheduleCache, ScheduleParser};
use crate::storage::KeyValueStore;
use crate::utils::http::Transport;

/// Entry point for schedule lookups, statistics and cache maintenance.
pub struct ExamService {
    fetcher: FragmentFetcher,
    parser: ScheduleParser,
    cache: ScheduleCache,
    store: Arc<dyn KeyValueStore>,
}

impl ExamService {
    /// Create a service from configuration and injected collaborators.
    pub fn new(
        config: &Config,
        transport: Arc<dyn Transport>,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self> {
        Ok(Self {
            fetcher: FragmentFetcher::new(transport, config.upstream.clone()),
            parser: ScheduleParser::new(&config.parser)?,
            cache: ScheduleCache::new(Arc::clone(&store)),
            store,
        })
    }

    /// The static department registry.
    pub fn departments(&self) -> &'static [Department] {
        department::departments()
    }

    /// Schedule for one department, from cache or fetched and parsed live.
    pub async fn get_tests(&self, slug: &str) -> Result<DepartmentSchedule> {
        let resolved = department::resolve(slug)?;

        if let Some(schedule) = self.cache.get(&resolved.cache_key).await {
            return Ok(schedule);
        }

        let fragment = self.fetcher.fetch(resolved.source_id).await?;
        let schedule = self.parser.parse(&fragment)?;
        self.cache.put(&resolved.cache_key, &schedule).await;

        log::info!(
            "Loaded {} ({} listings, {} exams)",
            resolved.department.name,
            schedule.listings().len(),
            schedule.row_count()
        );
        Ok(schedule)
    }

    /// Statistics over every exam of every department.
    ///
    /// All departments are loaded concurrently and every branch runs to
    /// completion; if any of them failed, the first failure in registry order
    /// is returned and no partial statistics are produced.
    pub async fn get_stats(&self) -> Result<Stats> {
        let departments = self.departments();
        let results = join_all(departments.iter().map(|d| self.get_tests(d.slug))).await;

        let mut failed = 0;
        let mut retryable = 0;
        for (dept, result) in departments.iter().zip(&results) {
            if let Err(e) = result {
                failed += 1;
                let kind = if e.is_retryable() {
                    retryable += 1;
                    "retryable"
                } else {
                    "permanent"
                };
                log::warn!("Failed to load {} ({}): {}", dept.slug, kind, e);
            }
        }
        if failed > 0 {
            log::error!(
                "{} of {} departments failed ({} retryable), no statistics produced",
                failed,
                departments.len(),
                retryable
            );
        }

        let schedules = results.into_iter().collect::<Result<Vec<_>>>()?;
        let stats = Stats::from_schedules(&schedules);

        log::info!(
            "Aggregated {} exams across {} departments",
            stats.num_tests,
            schedules.len()
        );
        Ok(stats)
    }

    /// Clear every cached department schedule.
    ///
    /// Returns `true` only when the cache was verified empty afterwards.
    pub async fn clear_cache(&self) -> bool {
        match self.cache.invalidate_all().await {
            Ok(deleted) => {
                log::info!("Cleared {} cached schedules", deleted);
                true
            }
            Err(e) => {
                log::warn!("Cache clear incomplete: {}", e);
                false
            }
        }
    }

    /// Release the underlying store.
    pub async fn close(&self) -> Result<()> {
        self.store.close().await
    }
}
