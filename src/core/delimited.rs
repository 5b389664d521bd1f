//! Conversion of heterogeneous record batches into delimited text.
//!
//! The header is the order-preserving union of field names across the
//! whole batch; every data line has exactly as many cells as the header,
//! with missing fields rendered as empty cells. Quoting (embedded
//! delimiters, quotes, line breaks) is handled by the `csv` writer.

use crate::domain::model::{Record, Scalar};
use crate::utils::error::{ReportError, Result};
use csv::WriterBuilder;
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Write;

/// What to do when a batch contains no records and no header can be
/// derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Fail the conversion.
    #[default]
    Reject,
    /// Emit an empty document with no header line.
    HeaderlessDocument,
}

/// Union of all field names across the batch, ordered by first appearance.
pub fn column_set(records: &[Record]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns: Vec<&str> = Vec::new();
    for record in records {
        for (name, _) in record.iter() {
            if seen.insert(name) {
                columns.push(name);
            }
        }
    }
    columns.into_iter().map(str::to_owned).collect()
}

/// Renders a batch of records as a tabular header plus one row of owned
/// cells per record, aligned to the header. Shared by the delimited-text
/// writer and the spreadsheet push.
pub fn tabulate(records: &[Record]) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = column_set(records);
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map_or(String::new(), |value| value.render().into_owned())
                })
                .collect()
        })
        .collect();
    (columns, rows)
}

/// Writes record batches as CSV or TSV to an output sink.
#[derive(Debug, Clone)]
pub struct DelimitedExporter {
    delimiter: u8,
    empty_input: EmptyInputPolicy,
}

impl DelimitedExporter {
    pub fn csv() -> Self {
        Self {
            delimiter: b',',
            empty_input: EmptyInputPolicy::default(),
        }
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            empty_input: EmptyInputPolicy::default(),
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn on_empty(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    /// Streams the header and one line per record into `sink`, in input
    /// order. Returns the number of data rows written.
    pub fn write_to<W: Write>(&self, records: &[Record], sink: W) -> Result<usize> {
        if records.is_empty() {
            return match self.empty_input {
                EmptyInputPolicy::Reject => Err(ReportError::EmptyInput),
                EmptyInputPolicy::HeaderlessDocument => Ok(0),
            };
        }

        let columns = column_set(records);
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(sink);

        writer.write_record(&columns)?;
        for record in records {
            let row: Vec<Cow<'_, str>> = columns
                .iter()
                .map(|column| {
                    record
                        .get(column)
                        .map_or(Cow::Borrowed(""), Scalar::render)
                })
                .collect();
            writer.write_record(row.iter().map(|cell| cell.as_bytes()))?;
        }
        writer.flush()?;
        Ok(records.len())
    }

    /// In-memory variant of [`write_to`](Self::write_to).
    pub fn to_string(&self, records: &[Record]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(records, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
