use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::Write;

use crate::batch::{BatchReport, OutputRow};
use crate::errors::Result;
use crate::io::output::OutputWriter;
use crate::metrics::MetricRecord;

const MAX_URL_WIDTH: usize = 60;

/// Human-readable table of headline metrics
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "ARTICLE METRICS".bold().cyan())?;
        writeln!(self.writer, "{}", build_table(&report.rows))?;
        writeln!(self.writer)?;

        let summary = &report.summary;
        let failed = if summary.failed == 0 {
            summary.failed.to_string().green()
        } else {
            summary.failed.to_string().red()
        };
        writeln!(
            self.writer,
            "{} {} articles, {} analyzed, {} failed",
            "Summary:".bold(),
            summary.total,
            summary.analyzed.to_string().green(),
            failed
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

fn build_table(rows: &[OutputRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            "#", "URL", "WORDS", "POLARITY", "SUBJECTIVITY", "FOG INDEX", "STATUS",
        ]);

    for row in rows {
        let mut cells = vec![(row.input.index + 1).to_string(), shorten(&row.input.url)];
        match (&row.metrics, &row.error) {
            (Some(metrics), _) => {
                cells.extend(metric_cells(metrics));
                cells.push("ok".to_string());
            }
            (None, error) => {
                cells.extend(std::iter::repeat("-".to_string()).take(4));
                cells.push(format!("failed: {}", error.as_deref().unwrap_or("unknown")));
            }
        }
        table.add_row(cells);
    }
    table
}

fn metric_cells(metrics: &MetricRecord) -> [String; 4] {
    [
        metrics.word_count.to_string(),
        format!("{:.3}", metrics.polarity_score),
        format!("{:.3}", metrics.subjectivity_score),
        format!("{:.2}", metrics.fog_index),
    ]
}

fn shorten(url: &str) -> String {
    if url.chars().count() <= MAX_URL_WIDTH {
        url.to_string()
    } else {
        let head: String = url.chars().take(MAX_URL_WIDTH - 1).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::input::InputTable;
    use crate::lexicon::Lexicon;
    use crate::metrics::analyze;

    #[test]
    fn test_terminal_output_lists_rows_and_summary() {
        colored::control::set_override(false);
        let table = InputTable::from_urls(["https://a.example", "https://b.example"]);
        let metrics = analyze(
            "Good things happen.",
            &Lexicon::empty(),
            &Lexicon::from_words(["good"]),
            &Lexicon::empty(),
        );
        let rows = vec![
            OutputRow::analyzed(table.rows[0].clone(), "A".to_string(), metrics),
            OutputRow::failed(table.rows[1].clone(), "HTTP 404"),
        ];
        let report = BatchReport::new(table.headers.clone(), rows);

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&report).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("https://a.example"));
        assert!(output.contains("failed: HTTP 404"));
        assert!(output.contains("Summary: 2 articles, 1 analyzed, 1 failed"));
    }

    #[test]
    fn test_long_urls_are_shortened() {
        let url = format!("https://example.com/{}", "a".repeat(100));
        let short = shorten(&url);
        assert_eq!(short.chars().count(), MAX_URL_WIDTH);
        assert!(short.ends_with('…'));
    }
}
