//! TSV ingestion
//!
//! Every `\n`-terminated line is a record, blank lines included. A line ends
//! at its first `\r` and anything after it is discarded, so CRLF input reads
//! cleanly. Fields are split on tabs and taken verbatim, with no quoting.
//! Ragged lines are padded to the widest line.

use std::io::{BufRead, BufReader, Read};

use super::model::Row;

/// Error type for TSV ingestion
#[derive(Debug)]
pub enum IngestError {
    /// The stream contained no lines, so there is no header row
    Empty,
    /// The underlying stream failed while reading
    Read { line: usize, source: std::io::Error },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Empty => write!(f, "No TSV data on stdin."),
            IngestError::Read { line, source } => {
                write!(f, "Failed to read TSV input at line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Empty => None,
            IngestError::Read { source, .. } => Some(source),
        }
    }
}

/// Parsed and normalized TSV content
///
/// Every row and the header have exactly `col_count` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub col_count: usize,
}

/// Split one raw line into cells, stopping at the first line terminator
///
/// An empty line yields a single empty cell.
fn split_line(line: &[u8]) -> Vec<String> {
    let end = line
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(line.len());

    line[..end]
        .split(|&b| b == b'\t')
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// Parse a tab-separated stream into a header and padded data rows
///
/// The first line is the header, even when it is blank. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD. Only a stream with no line at all
/// is rejected.
pub fn parse_tsv<R: Read>(reader: R) -> Result<TsvData, IngestError> {
    let mut reader = BufReader::new(reader);
    let mut lines: Vec<Vec<String>> = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| IngestError::Read {
                line: lines.len() + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        lines.push(split_line(&buf));
    }

    let mut lines = lines.into_iter();
    let mut headers = lines.next().ok_or(IngestError::Empty)?;
    let mut rows: Vec<Vec<String>> = lines.collect();

    let col_count = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);

    for c in headers.len()..col_count {
        headers.push(format!("Col {}", c + 1));
    }
    for cells in &mut rows {
        cells.resize(col_count, String::new());
    }

    tracing::debug!(
        rows = rows.len(),
        columns = col_count,
        "Ingested TSV stream"
    );

    Ok(TsvData {
        headers,
        rows: rows.into_iter().map(Row::new).collect(),
        col_count,
    })
}
