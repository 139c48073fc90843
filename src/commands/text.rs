use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::path::PathBuf;

use super::build_engine;
use crate::config::LexiconConfig;
use crate::io::{self, OutputFormat};
use crate::metrics::MetricRecord;

pub struct TextConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub lexicons: LexiconConfig,
}

pub fn handle_text(config: TextConfig) -> Result<()> {
    let engine = build_engine(&config.lexicons)?;
    let text = io::read_text(&config.path)
        .with_context(|| format!("Failed to read {}", config.path.display()))?;

    let record = engine.analyze(&text);
    println!("{}", render_record(&record, config.format)?);
    Ok(())
}

/// Render a single record as JSON or a two-column table
pub fn render_record(record: &MetricRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(record.fields().iter().map(|(name, _)| *name))?;
            writer.write_record(record.fields().iter().map(|(_, value)| value.to_string()))?;
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e.error()))?;
            Ok(String::from_utf8(bytes)?.trim_end().to_string())
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec!["METRIC", "VALUE"]);
            for (name, value) in record.fields() {
                table.add_row(vec![name.to_string(), value.to_string()]);
            }
            Ok(table.to_string())
        }
    }
}
