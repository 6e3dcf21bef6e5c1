//! In-memory survey table: an ordered sequence of named columns with O(1)
//! column lookup, row-major cell storage.
//!
//! This is deliberately not a dataframe. The pipeline only needs label-based
//! column access, projection, rename/drop, and per-column mapping, and every
//! transformation produces an independent copy so later mutation of one
//! table can never affect another.

use std::collections::HashMap;

use crate::error::{Result, TableError};

/// A single cell of a survey table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Build a cell from raw CSV text. Blank or whitespace-only input is
    /// treated as missing.
    pub fn from_raw(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::Missing
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Render the cell for delimited-text output. Missing cells render as
    /// the empty string so downstream consumers see their usual NA marker.
    pub fn to_output(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Missing => String::new(),
        }
    }
}

/// Formats a floating-point number without trailing fractional zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// An ordered, named-column table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given column names.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] when two columns share a name.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(columns.len());
        for (pos, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self {
            columns,
            index,
            rows: Vec::new(),
        })
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Append a row. Short rows are padded with missing cells; extra cells
    /// beyond the table width are dropped.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Cell accessor by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Project the named columns into a new, independent table, preserving
    /// the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] naming the first absent column.
    pub fn select(&self, wanted: &[&str]) -> Result<Table> {
        let mut positions = Vec::with_capacity(wanted.len());
        for name in wanted {
            let pos = self
                .column_index(name)
                .ok_or_else(|| TableError::MissingColumn((*name).to_string()))?;
            positions.push(pos);
        }
        let mut projected = Table::new(wanted.iter().map(|name| (*name).to_string()).collect())?;
        for row in &self.rows {
            let cells = positions.iter().map(|&pos| row[pos].clone()).collect();
            projected.push_row(cells);
        }
        Ok(projected)
    }

    /// Rename a column in place. Returns false when the source column is
    /// absent or the target name is already taken.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return self.has_column(from);
        }
        if self.has_column(to) {
            return false;
        }
        let Some(pos) = self.index.remove(from) else {
            return false;
        };
        self.columns[pos] = to.to_string();
        self.index.insert(to.to_string(), pos);
        true
    }

    /// Drop a column and its cells. Returns false when the column is absent.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(pos) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(pos);
        for row in &mut self.rows {
            row.remove(pos);
        }
        self.rebuild_index();
        true
    }

    /// Replace every cell of a column through `f`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] when the column is absent.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        let pos = self
            .column_index(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))?;
        for row in &mut self.rows {
            row[pos] = f(&row[pos]);
        }
        Ok(())
    }

    /// Replace all column names at once, e.g. after bulk canonicalization.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] when the new names collide.
    /// The name count must match the current width; extra names are an error
    /// reported as a duplicate of the first surplus name.
    pub fn set_column_names(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.columns.len() {
            let offending = names
                .get(self.columns.len())
                .cloned()
                .unwrap_or_else(|| format!("<width {}>", names.len()));
            return Err(TableError::MissingColumn(offending));
        }
        let mut index = HashMap::with_capacity(names.len());
        for (pos, name) in names.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        self.columns = names;
        self.index = index;
        Ok(())
    }

    /// Keep only the rows whose position is flagged true in `mask`.
    pub fn retain_rows(&mut self, mask: &[bool]) {
        let mut keep = mask.iter();
        self.rows.retain(|_| keep.next().copied().unwrap_or(true));
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .columns
            .iter()
            .enumerate()
            .map(|(pos, name)| (name.clone(), pos))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn sample() -> Table {
        let mut table =
            Table::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap();
        table.push_row(vec![text("1"), text("2"), text("3")]);
        table.push_row(vec![text("4"), text("5"), text("6")]);
        table
    }

    #[test]
    fn duplicate_columns_rejected() {
        let err = Table::new(vec!["a".to_string(), "a".to_string()]).unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn("a".to_string()));
    }

    #[test]
    fn push_row_pads_and_truncates() {
        let mut table = sample();
        table.push_row(vec![text("7")]);
        table.push_row(vec![text("8"), text("9"), text("10"), text("11")]);
        assert_eq!(table.cell(2, "c"), Some(&CellValue::Missing));
        assert_eq!(table.rows()[3].len(), 3);
    }

    #[test]
    fn select_copies_are_independent() {
        let table = sample();
        let mut projected = table.select(&["c", "a"]).unwrap();
        assert_eq!(projected.column_names(), ["c", "a"]);
        projected.map_column("a", |_| CellValue::Missing).unwrap();
        assert_eq!(table.cell(0, "a"), Some(&text("1")));
    }

    #[test]
    fn select_missing_column_names_offender() {
        let err = sample().select(&["a", "zzz"]).unwrap_err();
        assert_eq!(err, TableError::MissingColumn("zzz".to_string()));
    }

    #[test]
    fn rename_and_drop() {
        let mut table = sample();
        assert!(table.rename_column("b", "middle"));
        assert!(!table.rename_column("b", "again"));
        assert!(!table.rename_column("middle", "a"));
        assert!(table.drop_column("a"));
        assert_eq!(table.column_names(), ["middle", "c"]);
        assert_eq!(table.cell(1, "middle"), Some(&text("5")));
    }

    #[test]
    fn retain_rows_by_mask() {
        let mut table = sample();
        table.retain_rows(&[true, false]);
        assert_eq!(table.height(), 1);
        assert_eq!(table.cell(0, "a"), Some(&text("1")));
    }

    #[test]
    fn format_numeric_trims_fractions_only() {
        assert_eq!(format_numeric(7.5), "7.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.65), "100.65");
        assert_eq!(format_numeric(100.0), "100");
    }
}
