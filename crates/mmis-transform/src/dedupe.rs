//! First-wins deduplication by participant key.

use std::collections::BTreeSet;

use tracing::debug;

use mmis_model::{CellValue, Table};

use crate::error::{Result, TransformError};

/// Collapse duplicate rows sharing a key to the first-encountered row,
/// preserving first-seen key order. Rows with a blank key are never
/// collapsed, so the output key set always equals the input key set.
/// Later submissions are discarded without any consistency check against
/// the kept row.
pub fn dedupe_by_key(table: &mut Table, key: &str) -> Result<usize> {
    let key_idx = table
        .column_index(key)
        .ok_or_else(|| TransformError::Dedupe(mmis_model::TableError::MissingColumn(key.to_string())))?;

    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(table.height());
    for row in table.rows() {
        let value = match &row[key_idx] {
            CellValue::Text(text) => text.trim().to_string(),
            CellValue::Number(value) => mmis_model::format_numeric(*value),
            CellValue::Missing => String::new(),
        };
        if value.is_empty() {
            keep.push(true);
            continue;
        }
        keep.push(seen.insert(value));
    }
    let dropped = keep.iter().filter(|flag| !**flag).count();
    table.retain_rows(&keep);
    if dropped > 0 {
        debug!(key, dropped, "duplicate submissions collapsed, first row wins");
    }
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn keyed_table(rows: &[(&str, &str)]) -> Table {
        let mut table =
            Table::new(vec!["participant_number".to_string(), "age".to_string()]).unwrap();
        for (key, age) in rows {
            table.push_row(vec![CellValue::from_raw(key), CellValue::from_raw(age)]);
        }
        table
    }

    #[test]
    fn first_row_wins_and_order_is_first_seen() {
        let mut table = keyed_table(&[("20", "31"), ("7", "28"), ("20", "99"), ("3", "35")]);
        let dropped = dedupe_by_key(&mut table, "participant_number").unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(table.height(), 3);
        // Key order stays 20, 7, 3 and the first 20-row's age survives.
        assert_eq!(table.cell(0, "participant_number"), Some(&text("20")));
        assert_eq!(table.cell(0, "age"), Some(&text("31")));
        assert_eq!(table.cell(1, "participant_number"), Some(&text("7")));
        assert_eq!(table.cell(2, "participant_number"), Some(&text("3")));
    }

    #[test]
    fn blank_keys_are_never_collapsed() {
        let mut table = keyed_table(&[("", "31"), ("", "28"), ("5", "40"), ("5", "41")]);
        let dropped = dedupe_by_key(&mut table, "participant_number").unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(table.height(), 3);
    }

    #[test]
    fn keys_are_matched_after_trimming() {
        let mut table = keyed_table(&[(" 12", "31"), ("12 ", "32")]);
        let dropped = dedupe_by_key(&mut table, "participant_number").unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn missing_key_column_is_fatal() {
        let mut table = keyed_table(&[("1", "2")]);
        assert!(dedupe_by_key(&mut table, "no_such_key").is_err());
    }
}
