//! Runs the fetch-and-analyze loop over an input table

use rayon::prelude::*;

use super::observer::ArticleObserver;
use super::{BatchReport, OutputRow};
use crate::fetch::ArticleFetcher;
use crate::io::input::{InputRow, InputTable};
use crate::metrics::MetricsEngine;
use crate::progress::{ProgressManager, TEMPLATE_ARTICLES};

/// How a batch is executed
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Process articles on the rayon pool instead of one at a time
    pub parallel: bool,
    pub progress: ProgressManager,
}

/// Drives one batch: each row is fetched once, shown to the observers and
/// analyzed with the shared engine.
pub struct BatchRunner<'a> {
    engine: &'a MetricsEngine,
    fetcher: &'a dyn ArticleFetcher,
    observers: Vec<Box<dyn ArticleObserver + 'a>>,
    options: BatchOptions,
}

impl<'a> BatchRunner<'a> {
    pub fn new(engine: &'a MetricsEngine, fetcher: &'a dyn ArticleFetcher) -> Self {
        Self {
            engine,
            fetcher,
            observers: Vec::new(),
            options: BatchOptions::default(),
        }
    }

    pub fn with_observer(mut self, observer: impl ArticleObserver + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn with_options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Process every row; rows come back in input order
    pub fn run(&self, table: InputTable) -> BatchReport {
        let InputTable { headers, rows } = table;
        let total = rows.len();
        let progress = self.options.progress.create_bar(total as u64, TEMPLATE_ARTICLES);
        progress.set_message("Analyzing articles");

        let process = |row: InputRow| {
            let output = self.process_row(row, total);
            progress.inc(1);
            output
        };

        let output_rows: Vec<OutputRow> = if self.options.parallel {
            rows.into_par_iter().map(process).collect()
        } else {
            rows.into_iter().map(process).collect()
        };

        progress.finish_and_clear();

        let report = BatchReport::new(headers, output_rows);
        tracing::info!(
            total = report.summary.total,
            analyzed = report.summary.analyzed,
            failed = report.summary.failed,
            "Batch complete"
        );
        report
    }

    fn process_row(&self, row: InputRow, total: usize) -> OutputRow {
        tracing::info!("Processing URL {}/{}: {}", row.index + 1, total, row.url);

        if row.url.is_empty() {
            tracing::warn!(index = row.index, "Skipping row without a URL");
            return OutputRow::failed(row, "missing URL");
        }

        let article = match self.fetcher.fetch(&row.url) {
            Ok(article) => article,
            Err(e) if e.is_per_article() => {
                tracing::warn!("Skipping article: {}", e);
                return OutputRow::failed(row, e.to_string());
            }
            Err(e) => {
                tracing::error!(url = %row.url, "Unexpected error while fetching: {}", e);
                return OutputRow::failed(row, e.to_string());
            }
        };

        for observer in &self.observers {
            if let Err(e) = observer.on_article(&row, &article) {
                tracing::warn!(url = %row.url, "Article observer failed: {}", e);
            }
        }

        let metrics = self.engine.analyze(&article.text);
        tracing::debug!(
            url = %row.url,
            words = metrics.word_count,
            fog_index = metrics.fog_index,
            "Analyzed article"
        );
        OutputRow::analyzed(row, article.title, metrics)
    }
}
