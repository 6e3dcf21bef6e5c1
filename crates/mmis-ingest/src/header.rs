//! Column label canonicalization.
//!
//! Canonical form: lower-case, non-breaking spaces treated as ordinary
//! spaces, leading/trailing whitespace stripped, internal whitespace runs
//! collapsed and replaced by single underscores. Total over printable input
//! and idempotent.

/// Canonicalize one raw column label.
pub fn canonicalize_label(raw: &str) -> String {
    let cleaned = raw.replace('\u{00a0}', " ");
    let cleaned = cleaned.trim_matches('\u{feff}');
    cleaned
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Canonicalize a hierarchical label: each level is cleaned independently,
/// levels that clean to nothing or to the literal placeholder `none` are
/// omitted, and the rest are joined with underscores.
pub fn canonicalize_levels<'a, I>(levels: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    levels
        .into_iter()
        .map(canonicalize_label)
        .filter(|level| !level.is_empty() && level != "none")
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_underscores() {
        assert_eq!(canonicalize_label("Participant Number"), "participant_number");
        assert_eq!(canonicalize_label("  EPDS  1 "), "epds_1");
    }

    #[test]
    fn collapses_whitespace_runs_and_nbsp() {
        assert_eq!(canonicalize_label("sleep\u{00a0} night   Duration"), "sleep_night_duration");
        assert_eq!(canonicalize_label("\u{00a0}age\u{00a0}"), "age");
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(canonicalize_label("\u{feff}participant_number"), "participant_number");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["Participant Number", " CBTS  m 3 ", "age_bb", "\u{00a0}X  y\u{00a0}Z"] {
            let once = canonicalize_label(raw);
            assert_eq!(canonicalize_label(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn joins_levels_and_skips_none_placeholder() {
        assert_eq!(canonicalize_levels(["CBTS", "Item 3"]), "cbts_item_3");
        assert_eq!(canonicalize_levels(["None", "age"]), "age");
        assert_eq!(canonicalize_levels(["age", ""]), "age");
        assert_eq!(canonicalize_levels(["", "None"]), "");
    }
}
