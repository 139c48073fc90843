//! Batch runs over in-memory fetchers, from input table to written report

use article_metrics::errors::{Error, Result};
use article_metrics::io::input::read_input_table;
use article_metrics::io::writers::{CsvWriter, JsonWriter};
use article_metrics::{
    ArticleFetcher, BatchOptions, BatchRunner, FetchedArticle, Lexicon, LexiconSet,
    MetricsEngine, OutputWriter, TextDumpObserver, FIELD_NAMES,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Serves canned articles and counts every fetch attempt
struct CannedFetcher {
    pages: HashMap<&'static str, &'static str>,
    calls: AtomicUsize,
}

impl CannedFetcher {
    fn new() -> Self {
        let pages = HashMap::from([
            ("https://news.example/1", "The launch was a great success. We love it."),
            ("https://news.example/2", "Sales were poor. Investors are worried."),
            ("https://news.example/3", "Nothing happened today."),
        ]);
        Self {
            pages,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ArticleFetcher for CannedFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedArticle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .map(|text| FetchedArticle::new(format!("Title for {url}"), *text))
            .ok_or_else(|| Error::fetch(url, "HTTP 404 Not Found"))
    }
}

fn engine() -> MetricsEngine {
    MetricsEngine::new(LexiconSet::new(
        Lexicon::from_words(["the", "was", "a", "are"]),
        Lexicon::from_words(["great", "success", "love"]),
        Lexicon::from_words(["poor", "worried"]),
    ))
}

fn write_input(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("Input.csv");
    fs::write(
        &path,
        indoc! {"
            URL_ID,URL
            blk-1,https://news.example/1
            blk-2,https://news.example/missing
            blk-3,https://news.example/2
            blk-4,https://news.example/3
        "},
    )
    .unwrap();
    path
}

#[test]
fn test_batch_keeps_order_and_isolates_failures() {
    let temp = TempDir::new().unwrap();
    let table = read_input_table(&write_input(&temp), "URL").unwrap();
    let engine = engine();
    let fetcher = CannedFetcher::new();

    let report = BatchRunner::new(&engine, &fetcher).run(table);

    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 4);
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.analyzed, 3);
    assert_eq!(report.summary.failed, 1);

    let ids: Vec<&str> = report
        .rows
        .iter()
        .map(|row| row.input.values[0].as_str())
        .collect();
    assert_eq!(ids, vec!["blk-1", "blk-2", "blk-3", "blk-4"]);

    assert_eq!(report.rows[0].metrics.unwrap().positive_score, 3);
    assert!(report.rows[1].metrics.is_none());
    assert_eq!(report.rows[2].metrics.unwrap().negative_score, 2);
    assert!(report.rows[2].metrics.unwrap().polarity_score < 0.0);
}

#[test]
fn test_parallel_run_matches_sequential_run() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp);
    let engine = engine();
    let fetcher = CannedFetcher::new();

    let sequential = BatchRunner::new(&engine, &fetcher).run(read_input_table(&input, "URL").unwrap());
    let parallel = BatchRunner::new(&engine, &fetcher)
        .with_options(BatchOptions {
            parallel: true,
            ..Default::default()
        })
        .run(read_input_table(&input, "URL").unwrap());

    assert_eq!(sequential, parallel);
}

#[test]
fn test_text_dump_observer_writes_fetched_articles() {
    let temp = TempDir::new().unwrap();
    let table = read_input_table(&write_input(&temp), "URL").unwrap();
    let engine = engine();
    let fetcher = CannedFetcher::new();
    let observer = TextDumpObserver::new(temp.path().join("texts")).unwrap();

    BatchRunner::new(&engine, &fetcher)
        .with_observer(observer)
        .run(table);

    let dumped = fs::read_to_string(temp.path().join("texts/0_article_text.txt")).unwrap();
    assert_eq!(dumped, "The launch was a great success. We love it.");
    assert!(!temp.path().join("texts/1_article_text.txt").exists());
    assert!(temp.path().join("texts/3_article_text.txt").exists());
}

#[test]
fn test_csv_report_appends_metric_columns() {
    let temp = TempDir::new().unwrap();
    let table = read_input_table(&write_input(&temp), "URL").unwrap();
    let engine = engine();
    let report = BatchRunner::new(&engine, &CannedFetcher::new()).run(table);

    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer).write_report(&report).unwrap();
    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    let expected_header = std::iter::once("URL_ID")
        .chain(std::iter::once("URL"))
        .chain(FIELD_NAMES.iter().copied())
        .collect::<Vec<_>>()
        .join(",");
    assert_eq!(lines[0], expected_header);
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("blk-1,https://news.example/1,3,0,"));
    assert_eq!(
        lines[2],
        format!("blk-2,https://news.example/missing{}", ",".repeat(FIELD_NAMES.len()))
    );
}

#[test]
fn test_json_report_carries_summary_and_errors() {
    let temp = TempDir::new().unwrap();
    let table = read_input_table(&write_input(&temp), "URL").unwrap();
    let engine = engine();
    let report = BatchRunner::new(&engine, &CannedFetcher::new()).run(table);

    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer).write_report(&report).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(json["summary"]["total"], 4);
    assert_eq!(json["summary"]["failed"], 1);
    let articles = json["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 4);
    assert_eq!(articles[0]["input"]["URL_ID"], "blk-1");
    assert_eq!(articles[0]["metrics"]["POSITIVE SCORE"], 3);
    assert!(articles[1]["metrics"].is_null());
    assert!(articles[1]["error"].as_str().unwrap().contains("404"));
}
