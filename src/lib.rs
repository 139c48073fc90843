// Export modules for library usage
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod io;
pub mod lexicon;
pub mod metrics;
pub mod observability;
pub mod progress;
pub mod text;

// Re-export commonly used types
pub use crate::batch::{
    ArticleObserver, BatchOptions, BatchReport, BatchRunner, BatchSummary, OutputRow,
    TextDumpObserver,
};

pub use crate::config::{ArticleMetricsConfig, LexiconConfig};

pub use crate::errors::{Error, Result};

pub use crate::fetch::{ArticleFetcher, FetchedArticle, HttpFetcher};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::lexicon::{load_lexicon_set, Lexicon, LexiconSet};

pub use crate::metrics::{
    analyze, compute_metrics, count_syllables, MetricRecord, MetricValue, MetricsEngine,
    FIELD_NAMES,
};

pub use crate::text::{tokenize, TokenizedText};
