//! UTF-8 CSV materialization of the normalized survey tables.
//!
//! The two output files are a pair: every downstream analysis joins them on
//! `participant_number`, so a run must either publish both or neither. Each
//! table is serialized to a `.tmp` sibling first and the temporaries are
//! renamed into place only after both have been fully written and flushed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use mmis_model::Table;

/// One table to publish and the final file name it should get.
pub struct OutputTable<'a> {
    pub name: &'a str,
    pub table: &'a Table,
}

/// Write all tables under `output_dir`, all-or-nothing.
///
/// Returns the published paths in input order. On error nothing valid is
/// left behind: temporaries are removed and any already-renamed file from
/// this run is best-effort deleted.
pub fn write_csv_outputs(output_dir: &Path, tables: &[OutputTable<'_>]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(tables.len());
    let result = (|| -> Result<Vec<PathBuf>> {
        for output in tables {
            let final_path = output_dir.join(format!("{}.csv", output.name));
            let tmp_path = output_dir.join(format!("{}.csv.tmp", output.name));
            write_csv_table(&tmp_path, output.table)
                .with_context(|| format!("write {}", tmp_path.display()))?;
            staged.push((tmp_path, final_path));
        }
        let mut published = Vec::with_capacity(staged.len());
        for (tmp_path, final_path) in &staged {
            fs::rename(tmp_path, final_path)
                .with_context(|| format!("publish {}", final_path.display()))?;
            published.push(final_path.clone());
        }
        Ok(published)
    })();

    match result {
        Ok(published) => {
            for (path, output) in published.iter().zip(tables) {
                info!(
                    path = %path.display(),
                    rows = output.table.height(),
                    columns = output.table.width(),
                    "table published"
                );
            }
            Ok(published)
        }
        Err(error) => {
            for (tmp_path, final_path) in staged {
                let _ = fs::remove_file(tmp_path);
                let _ = fs::remove_file(final_path);
            }
            Err(error)
        }
    }
}

/// Serialize one table as UTF-8 CSV with a header row. The writer is scoped
/// to this function, so the handle is released even when writing fails.
fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    writer
        .write_record(table.column_names())
        .context("write header")?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.to_output()))
            .context("write row")?;
    }
    writer.flush().context("flush")?;
    debug!(path = %path.display(), rows = table.height(), "table serialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmis_model::CellValue;

    fn sample(name_prefix: &str) -> Table {
        let mut table = Table::new(vec![
            "participant_number".to_string(),
            format!("{name_prefix}_value"),
        ])
        .unwrap();
        table.push_row(vec![
            CellValue::Text("12".to_string()),
            CellValue::Number(7.5),
        ]);
        table.push_row(vec![CellValue::Text("7".to_string()), CellValue::Missing]);
        table
    }

    #[test]
    fn publishes_both_tables_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let participant = sample("participant");
        let mental_health = sample("mh");
        let paths = write_csv_outputs(
            dir.path(),
            &[
                OutputTable {
                    name: "participant",
                    table: &participant,
                },
                OutputTable {
                    name: "mental_health",
                    table: &mental_health,
                },
            ],
        )
        .unwrap();

        assert_eq!(paths.len(), 2);
        let text = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(text, "participant_number,participant_value\n12,7.5\n7,\n");
        assert!(paths[1].ends_with("mental_health.csv"));
        // No temporaries left behind.
        assert!(!dir.path().join("participant.csv.tmp").exists());
    }

    #[test]
    fn unwritable_destination_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample("participant");
        let missing = dir.path().join("nope");
        fs::write(&missing, b"not a dir").unwrap();
        let result = write_csv_outputs(
            &missing,
            &[OutputTable {
                name: "participant",
                table: &table,
            }],
        );
        assert!(result.is_err());
    }
}
