//! Semicolon-delimited text parsing.
//!
//! The dataset files use a simple delimited format: one header row naming
//! the columns, then one record per line, fields separated by semicolons.
//! Values contain no quoting or escaping; the format is deliberately plain
//! so the catalogs stay editable in any spreadsheet tool.

use crate::dataset::DatasetLoadError;

/// Field separator used by the dataset files.
pub const FIELD_SEPARATOR: char = ';';

/// Parsed contents of a delimited file: a header plus data records.
#[derive(Debug, Clone)]
pub struct Records {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Records {
    /// Parses delimited text into records.
    ///
    /// `file` is the dataset file name, used only for error reporting.
    ///
    /// Blank lines are skipped. Rows with fewer fields than the header are
    /// padded with empty strings, so trailing optional columns may be left
    /// off entirely; rows with more fields than the header are rejected.
    pub fn parse(file: &str, content: &str) -> Result<Self, DatasetLoadError> {
        let mut lines = content.lines().enumerate();

        let columns = loop {
            match lines.next() {
                Some((_, line)) if line.trim().is_empty() => {}
                Some((_, line)) => break split_fields(line),
                None => {
                    return Err(DatasetLoadError::MissingHeader {
                        file: file.to_string(),
                    })
                }
            }
        };

        let mut rows = Vec::new();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = split_fields(line);
            if fields.len() > columns.len() {
                return Err(DatasetLoadError::MalformedRow {
                    file: file.to_string(),
                    line: index + 1,
                    expected: columns.len(),
                    found: fields.len(),
                });
            }
            fields.resize(columns.len(), String::new());
            rows.push(fields);
        }

        Ok(Self { columns, rows })
    }

    /// Returns the index of a header column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Returns the index of a header column or a missing-column error.
    pub fn require_column(&self, file: &str, name: &str) -> Result<usize, DatasetLoadError> {
        self.column(name).ok_or_else(|| DatasetLoadError::MissingColumn {
            file: file.to_string(),
            column: name.to_string(),
        })
    }

    /// Returns the data rows in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Splits one line into trimmed fields.
fn split_fields(line: &str) -> Vec<String> {
    line.trim_end_matches('\r')
        .split(FIELD_SEPARATOR)
        .map(|field| field.trim().to_string())
        .collect()
}
