use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::batch::{BatchReport, BatchSummary};
use crate::errors::Result;
use crate::io::output::OutputWriter;
use crate::metrics::MetricRecord;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    summary: BatchSummary,
    articles: Vec<JsonArticle<'a>>,
}

#[derive(Serialize)]
struct JsonArticle<'a> {
    input: BTreeMap<&'a str, &'a str>,
    title: Option<&'a str>,
    metrics: Option<&'a MetricRecord>,
    error: Option<&'a str>,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> Result<()> {
        let articles = report
            .rows
            .iter()
            .map(|row| JsonArticle {
                input: report
                    .headers
                    .iter()
                    .map(String::as_str)
                    .zip(row.input.values.iter().map(String::as_str))
                    .collect(),
                title: row.title.as_deref(),
                metrics: row.metrics.as_ref(),
                error: row.error.as_deref(),
            })
            .collect();

        let json = JsonReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            summary: report.summary,
            articles,
        };

        serde_json::to_writer_pretty(&mut self.writer, &json)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
