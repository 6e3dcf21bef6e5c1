//! Schema mapping: semantic renames and removal of non-analytic columns.

use tracing::{debug, warn};

use mmis_model::{Table, schema};

/// Apply the fixed rename table and drop the inclusion/participation flags.
///
/// A column named in either list that is absent from this export is skipped
/// with a warning rather than aborting: the column set varies between export
/// waves and the split step still verifies everything it actually needs.
pub fn apply_schema_mapping(table: &mut Table) {
    for (name, _) in schema::COLUMN_RENAMES {
        if !table.has_column(name) {
            warn!(column = name, "rename source column absent, skipping");
        }
    }
    for (from, to) in schema::COLUMN_RENAMES {
        table.rename_column(from, to);
    }
    for name in schema::DROPPED_COLUMNS {
        if !table.drop_column(name) {
            warn!(column = name, "drop column absent, skipping");
        }
    }
    debug!(columns = table.width(), "schema mapping applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmis_model::CellValue;

    fn table_with(columns: &[&str]) -> Table {
        let mut table = Table::new(columns.iter().map(|name| (*name).to_string()).collect())
            .unwrap();
        table.push_row(vec![CellValue::Text("x".to_string()); columns.len()]);
        table
    }

    #[test]
    fn renames_and_drops() {
        let mut table = table_with(&[
            "participant_number",
            "type_parents",
            "sex_baby1",
            "birth_1mth_m_inclusion",
        ]);
        apply_schema_mapping(&mut table);
        assert_eq!(
            table.column_names(),
            ["participant_number", "mother_or_partner", "infant_sex"]
        );
    }

    #[test]
    fn absent_columns_are_skipped_not_fatal() {
        let mut table = table_with(&["participant_number"]);
        apply_schema_mapping(&mut table);
        assert_eq!(table.column_names(), ["participant_number"]);
        assert_eq!(table.height(), 1);
    }
}
