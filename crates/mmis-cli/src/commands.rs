use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use comfy_table::Table;
use tracing::info_span;

use mmis_cli::pipeline::{PipelineOptions, run_pipeline};
use mmis_model::CATEGORICAL_FIELDS;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_etl(args: &RunArgs) -> Result<RunResult> {
    let survey_csv = &args.survey_csv;
    let run_span = info_span!("run", input = %survey_csv.display());
    let _run_guard = run_span.enter();

    ensure!(
        args.delimiter.is_ascii(),
        "delimiter must be a single ASCII character"
    );
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        survey_csv
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
            .join("output")
    });
    let options = PipelineOptions {
        delimiter: args.delimiter as u8,
        header_rows: usize::from(args.header_rows),
        dry_run: args.dry_run,
    };
    let report = run_pipeline(survey_csv, &output_dir, &options)?;
    Ok(RunResult {
        survey_csv: survey_csv.clone(),
        output_dir,
        dry_run: args.dry_run,
        report,
    })
}

pub fn run_codes() -> Result<()> {
    for decode_table in CATEGORICAL_FIELDS {
        let mut table = Table::new();
        table.set_header(vec!["Code", "Label"]);
        apply_table_style(&mut table);
        for (code, label) in decode_table.entries() {
            table.add_row(vec![code.to_string(), (*label).to_string()]);
        }
        println!("{}", decode_table.field);
        println!("{table}");
        println!();
    }
    Ok(())
}
