//! CLI library components for the survey ETL.

pub mod logging;
pub mod pipeline;
