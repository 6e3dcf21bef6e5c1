//! Clock-style duration parsing for the nightly sleep field.
//!
//! The export records nightly sleep as free text in `HOURS:MINUTES` form.
//! Parsing returns a typed result so call sites can tell "parsed to zero"
//! from "failed to parse"; failures become missing values, never errors.

use tracing::debug;

use mmis_model::{CellValue, Table};

use crate::error::{Result, TransformError};

/// Parse an `H:M` string into fractional hours.
///
/// Exactly two integer components joined by one colon; anything else is
/// `None`. No range checks: the raw data contains at least one corrupted
/// entry ("100:39", i.e. 100.65 hours) that must survive verbatim so the
/// downstream analyses can apply their own filter.
pub fn parse_clock_duration(value: &str) -> Option<f64> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: i64 = hours.trim().parse().ok()?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    Some(hours as f64 + minutes as f64 / 60.0)
}

/// Convert a `H:M` text column into fractional hours in place. Unparseable
/// cells become missing.
pub fn convert_duration_column(table: &mut Table, column: &str) -> Result<usize> {
    let mut failures = 0usize;
    table
        .map_column(column, |cell| match cell {
            CellValue::Text(text) => match parse_clock_duration(text) {
                Some(hours) => CellValue::Number(hours),
                None => {
                    failures += 1;
                    CellValue::Missing
                }
            },
            CellValue::Number(value) => CellValue::Number(*value),
            CellValue::Missing => CellValue::Missing,
        })
        .map_err(TransformError::Duration)?;
    if failures > 0 {
        debug!(column, failures, "duration parse failures absorbed as missing");
    }
    Ok(failures)
}
