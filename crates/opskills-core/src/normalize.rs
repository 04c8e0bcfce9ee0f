//! Label and key canonicalization.
//!
//! Skill labels compare after trimming and lowercasing. Context titles
//! (sector and role names) use a looser form that also drops every
//! character outside `[a-z0-9]`, so "FOOD SECTOR", "Food-Sector" and
//! "food_sector" all meet on the same key.

/// Canonical form of a skill label: trimmed and lowercased.
pub fn canonicalize_label(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Canonical form of a possibly absent label. `None` becomes the empty string.
pub fn canonicalize_label_opt(text: Option<&str>) -> String {
    text.map(canonicalize_label).unwrap_or_default()
}

/// Canonical form of a context key: lowercased, ASCII alphanumerics only.
pub fn canonicalize_key(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_trims_and_lowercases() {
        assert_eq!(canonicalize_label("  Quality Assessment \t"), "quality assessment");
        assert_eq!(canonicalize_label("Machine/Robot maintenance"), "machine/robot maintenance");
        assert_eq!(canonicalize_label(""), "");
        assert_eq!(canonicalize_label("   "), "");
    }

    #[test]
    fn label_keeps_inner_whitespace_and_punctuation() {
        assert_eq!(
            canonicalize_label("Problem / Alert management"),
            "problem / alert management"
        );
    }

    #[test]
    fn absent_label_is_empty() {
        assert_eq!(canonicalize_label_opt(None), "");
        assert_eq!(canonicalize_label_opt(Some(" Task Knowledge ")), "task knowledge");
    }

    #[test]
    fn key_strips_non_alphanumerics() {
        assert_eq!(canonicalize_key("FOOD SECTOR"), "foodsector");
        assert_eq!(canonicalize_key("Food-Sector"), "foodsector");
        assert_eq!(canonicalize_key("food_sector"), "foodsector");
        assert_eq!(canonicalize_key(" plant flow-keeper "), "plantflowkeeper");
        assert_eq!(canonicalize_key("Role 3"), "role3");
    }

    #[test]
    fn key_drops_non_ascii_letters() {
        assert_eq!(canonicalize_key("Séctor"), "sctor");
        assert_eq!(canonicalize_key(""), "");
        assert_eq!(canonicalize_key("--//--"), "");
    }
}
