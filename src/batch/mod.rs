//! Batch orchestration: fetch, observe, analyze, collect
//!
//! Every input row produces exactly one [`OutputRow`]. Fetch failures are
//! isolated to their row: they are logged, counted in the summary and leave
//! the row without metrics.

pub mod observer;
pub mod runner;

pub use observer::{ArticleObserver, TextDumpObserver};
pub use runner::{BatchOptions, BatchRunner};

use serde::Serialize;

use crate::io::input::InputRow;
use crate::metrics::MetricRecord;

/// Result for one input row
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub input: InputRow,
    pub title: Option<String>,
    /// `None` when the article could not be fetched
    pub metrics: Option<MetricRecord>,
    pub error: Option<String>,
}

impl OutputRow {
    pub fn analyzed(input: InputRow, title: String, metrics: MetricRecord) -> Self {
        Self {
            input,
            title: Some(title),
            metrics: Some(metrics),
            error: None,
        }
    }

    pub fn failed(input: InputRow, error: impl Into<String>) -> Self {
        Self {
            input,
            title: None,
            metrics: None,
            error: Some(error.into()),
        }
    }

    pub fn is_analyzed(&self) -> bool {
        self.metrics.is_some()
    }
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub analyzed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_rows(rows: &[OutputRow]) -> Self {
        let analyzed = rows.iter().filter(|r| r.is_analyzed()).count();
        Self {
            total: rows.len(),
            analyzed,
            failed: rows.len() - analyzed,
        }
    }
}

/// All output rows of a batch, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Input column names, carried through to the output
    pub headers: Vec<String>,
    pub rows: Vec<OutputRow>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn new(headers: Vec<String>, rows: Vec<OutputRow>) -> Self {
        let summary = BatchSummary::from_rows(&rows);
        Self {
            headers,
            rows,
            summary,
        }
    }
}
