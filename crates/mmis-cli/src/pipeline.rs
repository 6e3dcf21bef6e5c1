//! Survey processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read and decode the survey export into a table with
//!    canonical column names
//! 2. **Transform**: Apply the schema mapping, split into the participant
//!    and mental health tables, clean instrument columns, decode
//!    categoricals, convert the sleep duration column
//! 3. **Dedupe**: Collapse duplicate submissions per participant, first
//!    row wins
//! 4. **Output**: Materialize both tables as UTF-8 CSV
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mmis_ingest::{ReadOptions, read_survey_table};
use mmis_model::{Table, schema};
use mmis_output::{OutputTable, write_csv_outputs};
use mmis_transform::{
    DecodeStats, apply_schema_mapping, clean_instrument_columns, convert_duration_column,
    decode_categoricals, dedupe_by_key, finalize_participant_columns, split_tables,
};

/// Options controlling one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Field delimiter of the survey export.
    pub delimiter: u8,
    /// Header rows in the survey export (1 or 2).
    pub header_rows: usize,
    /// Process and report without writing output files.
    pub dry_run: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header_rows: 1,
            dry_run: false,
        }
    }
}

/// Per-table outcome of a pipeline run.
#[derive(Debug)]
pub struct TableReport {
    /// Output table name, also the file stem.
    pub name: &'static str,
    /// Rows after deduplication.
    pub rows: usize,
    /// Published columns.
    pub columns: usize,
    /// Duplicate submissions collapsed.
    pub duplicates_dropped: usize,
    /// Published path, `None` on a dry run.
    pub path: Option<PathBuf>,
}

/// Outcome of a full pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Data rows read from the survey export.
    pub input_rows: usize,
    /// The demographic and infant sleep table.
    pub participant: TableReport,
    /// The instrument item table.
    pub mental_health: TableReport,
    /// Categorical decode counters.
    pub decode: DecodeStats,
    /// Sleep duration cells that did not parse as `H:MM`.
    pub duration_failures: usize,
}

/// Run the full pipeline over one survey export.
pub fn run_pipeline(
    survey_csv: &Path,
    output_dir: &Path,
    options: &PipelineOptions,
) -> Result<PipelineReport> {
    // Stage 1: Ingest
    let ingest_span = info_span!("ingest", input = %survey_csv.display());
    let ingest_start = Instant::now();
    let mut raw = ingest_span.in_scope(|| {
        read_survey_table(
            survey_csv,
            &ReadOptions {
                delimiter: options.delimiter,
                header_rows: options.header_rows,
            },
        )
        .with_context(|| format!("read {}", survey_csv.display()))
    })?;
    let input_rows = raw.height();
    info!(
        rows = input_rows,
        columns = raw.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: Transform
    let transform_span = info_span!("transform");
    let transform_start = Instant::now();
    let (mut participant, mut mental_health, decode, duration_failures) = transform_span
        .in_scope(|| -> Result<(Table, Table, DecodeStats, usize)> {
            apply_schema_mapping(&mut raw);
            let (mut participant, mut mental_health) =
                split_tables(&raw).context("split survey table")?;
            clean_instrument_columns(&mut mental_health).context("clean instrument columns")?;
            finalize_participant_columns(&mut participant)
                .context("finalize participant columns")?;
            let decode = decode_categoricals(&mut participant).context("decode categoricals")?;
            let duration_failures =
                convert_duration_column(&mut participant, schema::SLEEP_DURATION_COLUMN)
                    .context("convert sleep duration")?;
            Ok((participant, mental_health, decode, duration_failures))
        })?;
    info!(
        decoded = decode.decoded,
        decode_misses = decode.misses,
        duration_failures,
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    // Stage 3: Dedupe
    let dedupe_span = info_span!("dedupe", key = schema::PARTICIPANT_KEY);
    let dedupe_start = Instant::now();
    let (participant_dropped, mental_health_dropped) =
        dedupe_span.in_scope(|| -> Result<(usize, usize)> {
            let participant_dropped = dedupe_by_key(&mut participant, schema::PARTICIPANT_KEY)
                .context("dedupe participant table")?;
            let mental_health_dropped = dedupe_by_key(&mut mental_health, schema::PARTICIPANT_KEY)
                .context("dedupe mental health table")?;
            Ok((participant_dropped, mental_health_dropped))
        })?;
    info!(
        participant_rows = participant.height(),
        mental_health_rows = mental_health.height(),
        duplicates_dropped = participant_dropped + mental_health_dropped,
        duration_ms = dedupe_start.elapsed().as_millis(),
        "dedupe complete"
    );

    // Stage 4: Output
    let output_span = info_span!("output", output_dir = %output_dir.display());
    let output_start = Instant::now();
    let (participant_path, mental_health_path) = output_span.in_scope(
        || -> Result<(Option<PathBuf>, Option<PathBuf>)> {
            if options.dry_run {
                info!(
                    duration_ms = output_start.elapsed().as_millis(),
                    "output skipped (dry run)"
                );
                return Ok((None, None));
            }
            let mut published = write_csv_outputs(
                output_dir,
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
            .context("write output tables")?;
            let mental_health_path = published.pop();
            let participant_path = published.pop();
            info!(
                duration_ms = output_start.elapsed().as_millis(),
                "output complete"
            );
            Ok((participant_path, mental_health_path))
        },
    )?;

    Ok(PipelineReport {
        input_rows,
        participant: TableReport {
            name: "participant",
            rows: participant.height(),
            columns: participant.width(),
            duplicates_dropped: participant_dropped,
            path: participant_path,
        },
        mental_health: TableReport {
            name: "mental_health",
            rows: mental_health.height(),
            columns: mental_health.width(),
            duplicates_dropped: mental_health_dropped,
            path: mental_health_path,
        },
        decode,
        duration_failures,
    })
}
