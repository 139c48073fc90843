use crate::batch::BatchReport;
use crate::errors::{Error, Result};
use crate::io::writers::{CsvWriter, JsonWriter, TerminalWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "terminal" => Ok(Self::Terminal),
            other => Err(Error::Config(format!(
                "unknown output format '{other}' (expected csv, json or terminal)"
            ))),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &BatchReport) -> Result<()>;
}

/// Create a writer for the format, targeting a file or stdout
pub fn create_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            Error::Output(format!("cannot create {}: {e}", path.display()))
        })?)),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(sink)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("terminal".parse::<OutputFormat>().unwrap(), OutputFormat::Terminal);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }
}
