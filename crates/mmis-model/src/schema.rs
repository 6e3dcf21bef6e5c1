//! Canonical schema of the survey export: rename table, dropped columns,
//! and the two projections shared by every downstream analysis.
//!
//! Instrument references:
//! - CBTS: City Birth Trauma Scale (20 items, 3..=22)
//! - EPDS: Edinburgh Postnatal Depression Scale (10 items)
//! - HADS: Hospital Anxiety and Depression Scale, anxiety subset (odd items 1..=13)
//! - IBQ-R VSF: Infant Behavior Questionnaire Revised, very short form subset

/// Join key shared by both output tables.
pub const PARTICIPANT_KEY: &str = "participant_number";

/// Semantic renames applied to the normalized export before splitting.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("type_parents", "mother_or_partner"),
    ("marital_status_autre", "marital_status_other"),
    ("gestationnal_age", "infant_gestational_age"),
    ("type_pregnancy", "pregnancy_type"),
    ("sex_baby1", "infant_sex"),
    ("age_bb", "infant_age_category"),
    ("sleep_night_duration_bb1", "infant_nightly_sleep_duration"),
    ("night_awakening_number_bb1", "infant_wakes_per_night"),
    ("how_falling_asleep_bb1", "infant_sleeping_method"),
];

/// Inclusion/participation flags with no analytic value.
pub const DROPPED_COLUMNS: &[&str] = &[
    "birth_1mth_m_inclusion",
    "birth_12mth_m_inclusion",
    "child_survey_participation",
];

/// Participant/demographic projection taken from the renamed export.
pub const PARTICIPANT_COLUMNS: &[&str] = &[
    PARTICIPANT_KEY,
    "mother_or_partner",
    "age",
    "marital_status",
    "marital_status_other",
    "marital_status_edit",
    "education",
    "infant_gestational_age",
    "pregnancy_type",
    "infant_sex",
    "infant_age_category",
    "infant_nightly_sleep_duration",
    "infant_wakes_per_night",
    "infant_sleeping_method",
];

/// Mental-health projection: the join key plus every instrument item, still
/// under the raw export names (two CBTS naming eras, IBQ-R scale/baby
/// suffixes).
pub const MENTAL_HEALTH_COLUMNS: &[&str] = &[
    PARTICIPANT_KEY,
    "cbts_m_3",
    "cbts_m_4",
    "cbts_m_5",
    "cbts_m_6",
    "cbts_m_7",
    "cbts_m_8",
    "cbts_m_9",
    "cbts_m_10",
    "cbts_m_11",
    "cbts_m_12",
    "cbts_13",
    "cbts_14",
    "cbts_15",
    "cbts_16",
    "cbts_17",
    "cbts_18",
    "cbts_19",
    "cbts_20",
    "cbts_21",
    "cbts_22",
    "epds_1",
    "epds_2",
    "epds_3",
    "epds_4",
    "epds_5",
    "epds_6",
    "epds_7",
    "epds_8",
    "epds_9",
    "epds_10",
    "hads_1",
    "hads_3",
    "hads_5",
    "hads_7",
    "hads_9",
    "hads_11",
    "hads_13",
    "ibq_r_vsf_3_bb1",
    "ibq_r_vsf_4_bb1",
    "ibq_r_vsf_9_bb1",
    "ibq_r_vsf_10_bb1",
    "ibq_r_vsf_16_bb1",
    "ibq_r_vsf_17_bb1",
    "ibq_r_vsf_28_bb1",
    "ibq_r_vsf_29_bb1",
    "ibq_r_vsf_32_bb1",
    "ibq_r_vsf_33_bb1",
];

/// Redundant marital-status variants dropped from the participant table; the
/// edited field below becomes the single published `marital_status`.
pub const PARTICIPANT_FINAL_DROPS: &[&str] =
    &["mother_or_partner", "marital_status", "marital_status_other"];

/// Rename applied after the drops above.
pub const PARTICIPANT_FINAL_RENAME: (&str, &str) = ("marital_status_edit", "marital_status");

/// Free-text `HH:MM` field converted to fractional hours.
pub const SLEEP_DURATION_COLUMN: &str = "infant_nightly_sleep_duration";

/// Published participant table columns, in output order.
pub const PARTICIPANT_OUTPUT_COLUMNS: &[&str] = &[
    PARTICIPANT_KEY,
    "age",
    "marital_status",
    "education",
    "infant_gestational_age",
    "pregnancy_type",
    "infant_sex",
    "infant_age_category",
    "infant_nightly_sleep_duration",
    "infant_wakes_per_night",
    "infant_sleeping_method",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_sizes() {
        assert_eq!(PARTICIPANT_COLUMNS.len(), 14);
        // key + CBTS 20 + EPDS 10 + HADS 7 + IBQ-R 10
        assert_eq!(MENTAL_HEALTH_COLUMNS.len(), 48);
        assert_eq!(COLUMN_RENAMES.len(), 9);
        assert_eq!(DROPPED_COLUMNS.len(), 3);
        assert_eq!(PARTICIPANT_OUTPUT_COLUMNS.len(), 11);
    }

    #[test]
    fn output_columns_follow_from_projection() {
        let mut derived: Vec<&str> = PARTICIPANT_COLUMNS
            .iter()
            .copied()
            .filter(|name| !PARTICIPANT_FINAL_DROPS.contains(name))
            .collect();
        let (from, to) = PARTICIPANT_FINAL_RENAME;
        for name in &mut derived {
            if *name == from {
                *name = to;
            }
        }
        assert_eq!(derived, PARTICIPANT_OUTPUT_COLUMNS);
    }

    #[test]
    fn rename_targets_are_unique() {
        for (pos, (_, target)) in COLUMN_RENAMES.iter().enumerate() {
            for (_, other) in &COLUMN_RENAMES[pos + 1..] {
                assert_ne!(target, other);
            }
        }
    }
}
