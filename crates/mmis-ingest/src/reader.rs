//! Survey export reading with explicit header row configuration.
//!
//! Exports arrive either as UTF-8 (optionally with a BOM) or as an 8-bit
//! Latin-family encoding; the latter is decoded as Windows-1252. UTF-16 is
//! rejected up front so a garbled header never reaches the normalizer.

use std::path::Path;

use tracing::debug;

use mmis_model::{CellValue, Table, TableError};

use crate::error::{IngestError, Result};
use crate::header::{canonicalize_label, canonicalize_levels};

/// Options for reading one survey export.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field delimiter, `,` unless the export says otherwise.
    pub delimiter: u8,
    /// Header rows: 1 for a simple header, 2 for a two-level header whose
    /// levels are joined into one canonical name per column.
    pub header_rows: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header_rows: 1,
        }
    }
}

/// Read a survey export into a [`Table`] with canonical column names.
///
/// Blank lines are skipped. Data rows shorter than the header are padded
/// with missing cells; surplus cells are dropped.
pub fn read_survey_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let text = decode_bytes(path, &bytes)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let header_rows = options.header_rows.clamp(1, 2);
    if raw_rows.len() < header_rows {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let headers = if header_rows == 2 {
        let width = raw_rows[0].len().max(raw_rows[1].len());
        (0..width)
            .map(|idx| {
                let top = raw_rows[0].get(idx).map(String::as_str).unwrap_or("");
                let bottom = raw_rows[1].get(idx).map(String::as_str).unwrap_or("");
                canonicalize_levels([top, bottom])
            })
            .collect()
    } else {
        raw_rows[0]
            .iter()
            .map(|label| canonicalize_label(label))
            .collect()
    };

    let mut table = Table::new(headers).map_err(|err| match err {
        TableError::DuplicateColumn(column) => IngestError::DuplicateColumn {
            column,
            path: path.to_path_buf(),
        },
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;
    for record in &raw_rows[header_rows..] {
        let cells = record
            .iter()
            .map(|value| CellValue::from_raw(value))
            .collect();
        table.push_row(cells);
    }

    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "survey table ingested"
    );
    Ok(table)
}

/// Decode raw export bytes, falling back to Windows-1252 when the content is
/// not valid UTF-8.
fn decode_bytes(path: &Path, bytes: &[u8]) -> Result<String> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string()),
        Err(_) => {
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            debug!(path = %path.display(), "export is not UTF-8, decoded as windows-1252");
            Ok(text.into_owned())
        }
    }
}
