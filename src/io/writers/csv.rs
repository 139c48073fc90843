use std::io::Write;

use crate::batch::BatchReport;
use crate::errors::Result;
use crate::io::output::OutputWriter;
use crate::metrics::FIELD_NAMES;

/// Writes the input table augmented with one column per metric.
///
/// Rows whose article could not be analyzed keep their input cells and
/// leave the metric cells empty.
pub struct CsvWriter<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: ::csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &BatchReport) -> Result<()> {
        let header = report
            .headers
            .iter()
            .map(String::as_str)
            .chain(FIELD_NAMES.iter().copied());
        self.writer.write_record(header)?;

        for row in &report.rows {
            let mut record: Vec<String> = row.input.values.clone();
            match &row.metrics {
                Some(metrics) => {
                    record.extend(metrics.fields().iter().map(|(_, value)| value.to_string()))
                }
                None => record.extend(FIELD_NAMES.iter().map(|_| String::new())),
            }
            self.writer.write_record(&record)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
