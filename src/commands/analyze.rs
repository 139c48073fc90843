use anyhow::{Context, Result};
use std::path::PathBuf;

use super::build_engine;
use crate::batch::{BatchOptions, BatchRunner, TextDumpObserver};
use crate::config::{FetchConfig, LexiconConfig};
use crate::fetch::HttpFetcher;
use crate::io::{self, OutputFormat};
use crate::progress::{ProgressConfig, ProgressManager};

/// Fully resolved settings for one `analyze` run
pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub url_column: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub dump_text: Option<PathBuf>,
    pub jobs: usize,
    pub quiet: bool,
    pub lexicons: LexiconConfig,
    pub fetch: FetchConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    // Startup: everything here is fatal
    let engine = build_engine(&config.lexicons)?;
    let table = io::read_input_table(&config.input, &config.url_column)
        .with_context(|| format!("Failed to read input {}", config.input.display()))?;
    let fetcher = HttpFetcher::new(&config.fetch)?;
    configure_thread_pool(config.jobs);

    let options = BatchOptions {
        parallel: config.jobs != 1,
        progress: ProgressManager::new(ProgressConfig::from_env(config.quiet)),
    };
    let mut runner = BatchRunner::new(&engine, &fetcher).with_options(options);
    if let Some(dir) = &config.dump_text {
        let observer = TextDumpObserver::new(dir)
            .with_context(|| format!("Cannot create text dump directory {}", dir.display()))?;
        tracing::info!("Writing article text to {}", observer.dir().display());
        runner = runner.with_observer(observer);
    }

    // Per-article failures are recorded in the report, never returned
    let report = runner.run(table);

    let mut writer = io::create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report).context("Failed to write report")?;

    if let Some(path) = &config.output {
        tracing::info!("Output saved to {}", path.display());
    }
    Ok(())
}

/// Configure rayon global thread pool once at startup
fn configure_thread_pool(jobs: usize) {
    if jobs <= 1 {
        return;
    }
    if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global() {
        // A global pool may only be built once per process
        tracing::debug!("Thread pool already configured: {}", e);
    }
}
