//! Categorical decoding of integer survey codes into labels.

use tracing::debug;

use mmis_model::{CATEGORICAL_FIELDS, CellValue, DecodeTable, Table};

use crate::error::{Result, TransformError};

/// Per-run decode statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeStats {
    /// Cells whose code was absent from the decode table (now missing).
    pub misses: usize,
    /// Cells decoded to a label.
    pub decoded: usize,
}

/// Decode every categorical participant field in place. Codes not present in
/// the corresponding table become missing values; malformed survey exports
/// must never abort the run here. An absent categorical column is fatal.
pub fn decode_categoricals(table: &mut Table) -> Result<DecodeStats> {
    let mut stats = DecodeStats::default();
    for decode_table in CATEGORICAL_FIELDS {
        let field_stats = decode_field(table, decode_table)?;
        stats.decoded += field_stats.decoded;
        stats.misses += field_stats.misses;
    }
    Ok(stats)
}

/// Decode one categorical column in place.
pub fn decode_field(table: &mut Table, decode_table: &DecodeTable) -> Result<DecodeStats> {
    let mut stats = DecodeStats::default();
    table
        .map_column(decode_table.field, |cell| {
            match decode_cell(decode_table, cell) {
                Decoded::Label(label) => {
                    stats.decoded += 1;
                    CellValue::Text(label.to_string())
                }
                Decoded::Miss => {
                    stats.misses += 1;
                    CellValue::Missing
                }
                Decoded::AlreadyMissing => CellValue::Missing,
            }
        })
        .map_err(TransformError::Decode)?;
    if stats.misses > 0 {
        debug!(
            field = decode_table.field,
            misses = stats.misses,
            "decode misses absorbed as missing"
        );
    }
    Ok(stats)
}

enum Decoded {
    Label(&'static str),
    Miss,
    AlreadyMissing,
}

fn decode_cell(table: &DecodeTable, cell: &CellValue) -> Decoded {
    let code = match cell {
        CellValue::Missing => return Decoded::AlreadyMissing,
        CellValue::Number(value) if value.fract() == 0.0 => *value as i64,
        CellValue::Number(_) => return Decoded::Miss,
        CellValue::Text(text) => match parse_code(text) {
            Some(code) => code,
            None => return Decoded::Miss,
        },
    };
    match table.decode(code) {
        Some(label) => Decoded::Label(label),
        None => Decoded::Miss,
    }
}

/// Survey codes arrive as integer text, occasionally with a decimal tail
/// ("2.0") from spreadsheet round-tripping.
fn parse_code(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if let Ok(code) = trimmed.parse::<i64>() {
        return Some(code);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}
