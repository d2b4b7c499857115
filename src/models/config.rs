//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Selector;
use serde::{Deserialize, Serialize};

use super::ScheduleSelectors;
use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream portal endpoint and HTTP behaviour
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Fragment selectors
    #[serde(default)]
    pub parser: ScheduleSelectors,

    /// Schedule cache backend
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.base_url.trim().is_empty() {
            return Err(AppError::validation("upstream.base_url is empty"));
        }
        url::Url::parse(&self.upstream.base_url)?;
        if self.upstream.user_agent.trim().is_empty() {
            return Err(AppError::validation("upstream.user_agent is empty"));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(AppError::validation("upstream.timeout_secs must be > 0"));
        }
        for (field, selector) in self.parser.named() {
            Selector::parse(selector)
                .map_err(|e| AppError::selector(selector, format!("{field}: {e:?}")))?;
        }
        if self.cache.backend == CacheBackend::Local && self.cache.dir.as_os_str().is_empty() {
            return Err(AppError::validation("cache.dir is empty"));
        }
        Ok(())
    }
}

/// Upstream portal settings.
///
/// The endpoint serves one JSON-wrapped fragment per department, selected by
/// the `svidID` query parameter appended at request time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Endpoint without query string
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Portal session id (`sid`)
    #[serde(default = "defaults::sid")]
    pub sid: u32,

    /// Portal action (`a`)
    #[serde(default = "defaults::action")]
    pub action: String,

    /// Exam timetable id (`proftaflaID`)
    #[serde(default = "defaults::schedule_id")]
    pub schedule_id: u32,

    /// Whether to read the draft timetable (`notaVinnuToflu`)
    #[serde(default)]
    pub use_work_table: bool,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            sid: defaults::sid(),
            action: defaults::action(),
            schedule_id: defaults::schedule_id(),
            use_work_table: false,
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Which key-value store backs the schedule cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Files under `cache.dir`, surviving restarts
    #[default]
    Local,
    /// Process memory only
    Memory,
}

/// Schedule cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    /// Root directory for the local backend
    #[serde(default = "defaults::cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            dir: defaults::cache_dir(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Upstream defaults
    pub fn base_url() -> String {
        "https://ugla.hi.is/Proftafla/View/ajax.php".into()
    }
    pub fn sid() -> u32 {
        2027
    }
    pub fn action() -> String {
        "getProfSvids".into()
    }
    pub fn schedule_id() -> u32 {
        37
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; proftafla/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Cache defaults
    pub fn cache_dir() -> PathBuf {
        PathBuf::from("storage/cache")
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}
