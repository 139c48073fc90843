//! CLI command implementations for article-metrics.
//!
//! Available commands:
//! - **analyze**: Fetch and score every article in an input table
//! - **text**: Score a single local text file
//! - **init**: Write a default configuration file

pub mod analyze;
pub mod init;
pub mod text;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use text::{handle_text, TextConfig};

use anyhow::{Context, Result};

use crate::cli::LexiconArgs;
use crate::config::LexiconConfig;
use crate::lexicon::load_lexicon_set;
use crate::metrics::MetricsEngine;

/// Apply command-line word-list overrides on top of the configured paths
pub fn resolve_lexicon_config(base: &LexiconConfig, args: &LexiconArgs) -> LexiconConfig {
    LexiconConfig {
        stop_words: args
            .stop_words
            .clone()
            .unwrap_or_else(|| base.stop_words.clone()),
        positive_words: args
            .positive_words
            .clone()
            .unwrap_or_else(|| base.positive_words.clone()),
        negative_words: args
            .negative_words
            .clone()
            .unwrap_or_else(|| base.negative_words.clone()),
    }
}

/// Load all word lists and build the engine. Missing lists are fatal.
pub fn build_engine(lexicons: &LexiconConfig) -> Result<MetricsEngine> {
    let set = load_lexicon_set(lexicons).context("Cannot start analysis without all word lists")?;
    Ok(MetricsEngine::new(set))
}
