//! End-to-end pipeline runs over temporary survey export fixtures.

use std::fs;

use mmis_cli::pipeline::{PipelineOptions, run_pipeline};
use mmis_model::schema;

/// Raw export columns as the survey platform names them: the rename sources,
/// the dropped inclusion flags, and the instrument items.
fn raw_header() -> Vec<String> {
    let mut columns: Vec<String> = [
        "participant_number",
        "type_parents",
        "age",
        "marital_status",
        "marital_status_autre",
        "marital_status_edit",
        "education",
        "gestationnal_age",
        "type_pregnancy",
        "sex_baby1",
        "age_bb",
        "sleep_night_duration_bb1",
        "night_awakening_number_bb1",
        "how_falling_asleep_bb1",
        "birth_1mth_m_inclusion",
        "birth_12mth_m_inclusion",
        "child_survey_participation",
    ]
    .iter()
    .map(|name| (*name).to_string())
    .collect();
    columns.extend(
        schema::MENTAL_HEALTH_COLUMNS[1..]
            .iter()
            .map(|name| (*name).to_string()),
    );
    columns
}

fn raw_row(participant: &str, sleep: &str) -> Vec<String> {
    let mut cells: Vec<String> = [
        participant,
        "1",
        "31",
        "2",
        "",
        "2",
        "4",
        "39",
        "1",
        "2",
        "2",
        sleep,
        "2",
        "4",
        "1",
        "1",
        "1",
    ]
    .iter()
    .map(|value| (*value).to_string())
    .collect();
    cells.extend(std::iter::repeat_n("3".to_string(), 47));
    cells
}

fn fixture_csv(rows: &[Vec<String>]) -> String {
    let mut lines = vec![raw_header().join(",")];
    lines.extend(rows.iter().map(|row| row.join(",")));
    lines.join("\n")
}

#[test]
fn full_run_collapses_duplicates_and_publishes_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let survey_csv = dir.path().join("survey.csv");
    fs::write(
        &survey_csv,
        fixture_csv(&[
            raw_row("101", "7:30"),
            raw_row("102", "8:15"),
            raw_row("101", "9:00"),
            raw_row("103", "abc"),
            raw_row("104", "100:39"),
        ]),
    )
    .unwrap();
    let output_dir = dir.path().join("output");

    let report = run_pipeline(&survey_csv, &output_dir, &PipelineOptions::default()).unwrap();

    assert_eq!(report.input_rows, 5);
    assert_eq!(report.participant.rows, 4);
    assert_eq!(report.participant.duplicates_dropped, 1);
    assert_eq!(report.mental_health.rows, 4);
    assert_eq!(report.decode.misses, 0);
    assert_eq!(report.duration_failures, 1);

    let participant_csv = fs::read_to_string(output_dir.join("participant.csv")).unwrap();
    let mut lines = participant_csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        schema::PARTICIPANT_OUTPUT_COLUMNS.join(",")
    );
    assert_eq!(lines.count(), 4);
    // First submission of participant 101 wins.
    assert!(participant_csv.contains("7.5"));
    assert!(!participant_csv.contains(",9,"));
    // The corrupted duration entry survives verbatim.
    assert!(participant_csv.contains("100.65"));

    let mental_health_csv = fs::read_to_string(output_dir.join("mental_health.csv")).unwrap();
    assert_eq!(mental_health_csv.lines().count(), 5);
    let keys: Vec<&str> = mental_health_csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(keys, ["101", "102", "103", "104"]);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let survey_csv = dir.path().join("survey.csv");
    fs::write(&survey_csv, fixture_csv(&[raw_row("101", "7:30")])).unwrap();
    let output_dir = dir.path().join("output");

    let options = PipelineOptions {
        dry_run: true,
        ..PipelineOptions::default()
    };
    let report = run_pipeline(&survey_csv, &output_dir, &options).unwrap();

    assert_eq!(report.participant.rows, 1);
    assert!(report.participant.path.is_none());
    assert!(report.mental_health.path.is_none());
    assert!(!output_dir.exists() || fs::read_dir(&output_dir).unwrap().next().is_none());
}

#[test]
fn latin1_export_is_ingested() {
    let dir = tempfile::tempdir().unwrap();
    let survey_csv = dir.path().join("survey.csv");
    // Participant key carries a Latin-1 e-acute (0xE9).
    let text = fixture_csv(&[raw_row("b\u{e9}b\u{e9}1", "7:30")]);
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| if c == '\u{e9}' { 0xe9 } else { c as u8 })
        .collect();
    fs::write(&survey_csv, bytes).unwrap();
    let output_dir = dir.path().join("output");

    let report = run_pipeline(&survey_csv, &output_dir, &PipelineOptions::default()).unwrap();

    assert_eq!(report.participant.rows, 1);
    let participant_csv = fs::read_to_string(output_dir.join("participant.csv")).unwrap();
    assert!(participant_csv.contains("bébé1"));
}
