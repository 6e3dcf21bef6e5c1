//! Splitting the unified export into the participant and mental-health
//! projections, and finalizing the participant column set.

use tracing::debug;

use mmis_model::{Table, schema};

use crate::error::{Result, TransformError};

/// Project the renamed export into two independent tables sharing
/// `participant_number`. Any expected column missing from the source is a
/// fatal error naming the column.
pub fn split_tables(table: &Table) -> Result<(Table, Table)> {
    let participant = table
        .select(schema::PARTICIPANT_COLUMNS)
        .map_err(TransformError::Split)?;
    let mental_health = table
        .select(schema::MENTAL_HEALTH_COLUMNS)
        .map_err(TransformError::Split)?;
    debug!(
        participant_columns = participant.width(),
        mental_health_columns = mental_health.width(),
        rows = table.height(),
        "export split"
    );
    Ok((participant, mental_health))
}

/// Collapse the marital-status variants: the raw and free-text fields are
/// dropped and the edited field becomes the published `marital_status`.
pub fn finalize_participant_columns(table: &mut Table) -> Result<()> {
    for name in schema::PARTICIPANT_FINAL_DROPS {
        if !table.drop_column(name) {
            return Err(TransformError::Finalize(
                mmis_model::TableError::MissingColumn((*name).to_string()),
            ));
        }
    }
    let (from, to) = schema::PARTICIPANT_FINAL_RENAME;
    if !table.rename_column(from, to) {
        return Err(TransformError::Finalize(
            mmis_model::TableError::MissingColumn(from.to_string()),
        ));
    }
    Ok(())
}
