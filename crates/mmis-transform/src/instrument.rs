//! Instrument item name cleaning for the mental-health table.
//!
//! Two historical naming eras coexist in the export: early CBTS items carry a
//! `_m_` marker (`cbts_m_9`) and IBQ-R items carry the scale-variant and
//! baby-index suffixes (`ibq_r_vsf_16_bb1`). Both collapse to the short
//! canonical item names used by every analysis.

use tracing::debug;

use mmis_model::Table;

use crate::error::{Result, TransformError};

/// Canonical name for one instrument column. Non-instrument names pass
/// through unchanged. Idempotent: already-clean names are untouched.
pub fn canonical_item_name(name: &str) -> String {
    if name.starts_with("cbts") {
        name.replace("_m_", "_")
    } else if name.starts_with("ibq") {
        name.replace("_r_vsf", "").replace("_bb1", "")
    } else {
        name.to_string()
    }
}

/// Rewrite every column of the mental-health table to its canonical item
/// name.
pub fn clean_instrument_columns(table: &mut Table) -> Result<()> {
    let names: Vec<String> = table
        .column_names()
        .iter()
        .map(|name| canonical_item_name(name))
        .collect();
    table
        .set_column_names(names)
        .map_err(TransformError::Instrument)?;
    debug!(columns = table.width(), "instrument columns cleaned");
    Ok(())
}
