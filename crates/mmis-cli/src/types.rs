use std::path::PathBuf;

use mmis_cli::pipeline::PipelineReport;

#[derive(Debug)]
pub struct RunResult {
    pub survey_csv: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub report: PipelineReport,
}
