//! Fixed categorical decode tables for the participant survey fields.
//!
//! These are configuration constants, not data-derived mappings: each table
//! mirrors the coding sheet of the source questionnaire. Adding or correcting
//! a label only touches this module, never the transformation logic.

/// Immutable mapping from a small positive integer survey code to its label.
#[derive(Debug, Clone, Copy)]
pub struct DecodeTable {
    /// Canonical column name of the field this table decodes.
    pub field: &'static str,
    entries: &'static [(i64, &'static str)],
}

impl DecodeTable {
    /// Label for a survey code, or `None` for a decode miss. Out-of-range
    /// codes are expected in real exports and must not abort the pipeline.
    pub fn decode(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| *label)
    }

    /// Reverse lookup, exact label match.
    pub fn encode(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, value)| *value == label)
            .map(|(key, _)| *key)
    }

    pub fn entries(&self) -> &'static [(i64, &'static str)] {
        self.entries
    }
}

/// Question: current marital status (edited final field).
pub const MARITAL_STATUS: DecodeTable = DecodeTable {
    field: "marital_status",
    entries: &[
        (1, "Single"),
        (2, "In a relationship"),
        (3, "Separated, divorced or widowed"),
    ],
};

/// Question: highest completed education level.
pub const EDUCATION: DecodeTable = DecodeTable {
    field: "education",
    entries: &[
        (1, "No education"),
        (2, "Compulsory education"),
        (3, "Post-compulsory education (i.e. apprenticeship)"),
        (4, "Bachelor's degree or above in STEM field"),
        (5, "Bachelor's degree or above"),
    ],
};

/// Question: single or multiple pregnancy.
pub const PREGNANCY_TYPE: DecodeTable = DecodeTable {
    field: "pregnancy_type",
    entries: &[(1, "Single pregnancy"), (2, "Twin pregnancy")],
};

/// Question: sex of the (first) infant.
pub const INFANT_SEX: DecodeTable = DecodeTable {
    field: "infant_sex",
    entries: &[(1, "Female"), (2, "Male")],
};

/// Question: infant age bracket at survey time.
pub const INFANT_AGE_CATEGORY: DecodeTable = DecodeTable {
    field: "infant_age_category",
    entries: &[(1, "3-6 months"), (2, "6-9 months"), (3, "9-12 months")],
};

/// Question: how the infant usually falls asleep at night.
pub const INFANT_SLEEPING_METHOD: DecodeTable = DecodeTable {
    field: "infant_sleeping_method",
    entries: &[
        (1, "While being fed"),
        (2, "While being rocked"),
        (3, "While being held"),
        (4, "Alone in the crib"),
        (5, "In the crib with parental presence"),
    ],
};

/// All categorical participant fields, keyed by their canonical column name.
pub const CATEGORICAL_FIELDS: &[DecodeTable] = &[
    MARITAL_STATUS,
    EDUCATION,
    PREGNANCY_TYPE,
    INFANT_SEX,
    INFANT_AGE_CATEGORY,
    INFANT_SLEEPING_METHOD,
];
