//! proftafla CLI
//!
//! Local execution entry point for schedule lookups and statistics.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use proftafla::{
    error::Result,
    models::{CacheBackend, Config},
    pipeline,
};

/// proftafla - University of Iceland exam schedules
#[derive(Parser, Debug)]
#[command(name = "proftafla", version, about = "Exam schedule fetcher and statistics")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Directory for the local schedule cache (overrides config)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Keep the schedule cache in memory for this run only
    #[arg(long, global = true, conflicts_with = "cache_dir")]
    memory_cache: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered departments
    Departments,

    /// Print the exam schedule of one department
    Tests {
        /// Department slug (see `departments`)
        slug: String,
    },

    /// Print statistics over every department
    Stats,

    /// Clear every cached schedule
    ClearCache,

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    init_logging(cli.verbose, &config.logging.level);

    if let Some(dir) = cli.cache_dir {
        config.cache.backend = CacheBackend::Local;
        config.cache.dir = dir;
    }
    if cli.memory_cache {
        config.cache.backend = CacheBackend::Memory;
    }

    if let Command::Validate = cli.command {
        return pipeline::run_validate(&config);
    }

    let service = pipeline::build_service(&config).await?;
    let mut stdout = io::stdout().lock();

    let result = match cli.command {
        Command::Departments => pipeline::run_departments(&service, &mut stdout),
        Command::Tests { slug } => pipeline::run_tests(&service, &slug, &mut stdout).await,
        Command::Stats => pipeline::run_stats(&service, &mut stdout).await,
        Command::ClearCache => pipeline::run_clear_cache(&service).await,
        Command::Validate => Ok(()),
    };
    stdout.flush()?;

    if let Err(e) = service.close().await {
        log::warn!("Failed to close cache store: {}", e);
    }
    result
}
