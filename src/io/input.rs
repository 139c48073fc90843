//! Reading the list of article URLs
//!
//! Two layouts are accepted:
//!
//! - CSV with a header row; one column holds the URL and every column is
//!   carried through to the output (`URL_ID,URL` for example)
//! - plain text with one URL per line; blank lines and `#` comments are
//!   skipped and a single `URL` column is synthesized

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::{Error, Result};

/// Input rows plus the header they were read with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<InputRow>,
}

/// One article to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// Zero-based position in the input
    pub index: usize,
    pub url: String,
    /// Original cell values, aligned with [`InputTable::headers`]
    pub values: Vec<String>,
}

impl InputTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a single-column table from bare URLs
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = urls
            .into_iter()
            .enumerate()
            .map(|(index, url)| {
                let url = url.into();
                InputRow {
                    index,
                    values: vec![url.clone()],
                    url,
                }
            })
            .collect();
        Self {
            headers: vec!["URL".to_string()],
            rows,
        }
    }
}

/// Read the input table, choosing the layout from the file extension
pub fn read_input_table(path: &Path, url_column: &str) -> Result<InputTable> {
    let is_plain_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    let table = if is_plain_text {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::input(path, format!("cannot read file: {e}")))?;
        parse_url_lines(&contents)
    } else {
        let file = fs::File::open(path)
            .map_err(|e| Error::input(path, format!("cannot open file: {e}")))?;
        read_csv_table(file, url_column, path)?
    };

    tracing::info!(rows = table.len(), path = %path.display(), "Read input table");
    Ok(table)
}

/// Parse one URL per line
pub fn parse_url_lines(contents: &str) -> InputTable {
    InputTable::from_urls(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

/// Read a CSV table whose `url_column` holds the article URLs.
///
/// The column is matched exactly first, then ignoring case.
pub fn read_csv_table<R: Read>(reader: R, url_column: &str, path: &Path) -> Result<InputTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let url_index = headers
        .iter()
        .position(|h| h == url_column)
        .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(url_column)))
        .ok_or_else(|| {
            Error::input(
                path,
                format!("no '{url_column}' column (found: {})", headers.join(", ")),
            )
        })?;

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut values: Vec<String> = record.iter().map(str::to_string).collect();
        values.resize(headers.len(), String::new());
        rows.push(InputRow {
            index,
            url: values[url_index].clone(),
            values,
        });
    }

    Ok(InputTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_csv_keeps_all_columns() {
        let csv = indoc! {"
            URL_ID,URL
            37.0,https://example.com/a
            38.0,https://example.com/b
        "};
        let table = read_csv_table(csv.as_bytes(), "URL", Path::new("input.csv")).unwrap();
        assert_eq!(table.headers, vec!["URL_ID", "URL"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].url, "https://example.com/b");
        assert_eq!(table.rows[1].values, vec!["38.0", "https://example.com/b"]);
        assert_eq!(table.rows[1].index, 1);
    }

    #[test]
    fn test_url_column_falls_back_to_case_insensitive_match() {
        let csv = "id,url\n1,https://example.com\n";
        let table = read_csv_table(csv.as_bytes(), "URL", Path::new("input.csv")).unwrap();
        assert_eq!(table.rows[0].url, "https://example.com");
    }

    #[test]
    fn test_missing_url_column_is_an_error() {
        let csv = "id,link\n1,https://example.com\n";
        let err = read_csv_table(csv.as_bytes(), "URL", Path::new("input.csv")).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
        assert!(err.to_string().contains("no 'URL' column"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let csv = "URL,note\nhttps://example.com\n";
        let table = read_csv_table(csv.as_bytes(), "URL", Path::new("input.csv")).unwrap();
        assert_eq!(table.rows[0].values, vec!["https://example.com", ""]);
    }

    #[test]
    fn test_parse_url_lines_skips_blanks_and_comments() {
        let table = parse_url_lines("# articles\nhttps://a.example\n\n  https://b.example  \n");
        assert_eq!(table.headers, vec!["URL"]);
        let urls: Vec<&str> = table.rows.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }
}
