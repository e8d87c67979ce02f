//! Normalized drug name used to look a drug up on the source site.

use std::fmt;

/// A user-supplied drug name, normalized for lookup.
///
/// Normalization lower-cases the input and removes all whitespace, so
/// `"  Vitamin D "` becomes `"vitamind"`. Hyphens are kept; they are only
/// ignored when comparing against index entries (see [`DrugQuery::matches`]).
///
/// Any input is accepted, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrugQuery {
    normalized: String,
}

impl DrugQuery {
    /// Normalizes raw user input into a query.
    pub fn new(raw: &str) -> Self {
        let normalized = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        Self { normalized }
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns true if nothing remained after normalization.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns the alphabetical index shard for this query.
    ///
    /// The shard is the first two characters of the normalized name. Shorter
    /// names yield a shorter (possibly empty) key instead of an error.
    pub fn shard_key(&self) -> String {
        self.normalized.chars().take(2).collect()
    }

    /// Returns true if an index entry's display name refers to this drug.
    ///
    /// Both sides are compared case-insensitively with hyphens and whitespace
    /// removed, so `"Drug-Name"`, `"drug name"` and `"DRUGNAME"` all match the
    /// same entry.
    pub fn matches(&self, display_name: &str) -> bool {
        comparison_key(display_name) == comparison_key(&self.normalized)
    }
}

impl fmt::Display for DrugQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

fn comparison_key(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let query = DrugQuery::new("  Vitamin D \t");
        assert_eq!(query.as_str(), "vitamind");
        assert_eq!(query.to_string(), "vitamind");
    }

    #[test]
    fn test_keeps_hyphens() {
        assert_eq!(DrugQuery::new("Co-Codamol").as_str(), "co-codamol");
    }

    #[test]
    fn test_shard_key() {
        assert_eq!(DrugQuery::new("Aspirin").shard_key(), "as");
        assert_eq!(DrugQuery::new("x").shard_key(), "x");
        assert_eq!(DrugQuery::new("   ").shard_key(), "");
        assert!(DrugQuery::new("   ").is_empty());
    }

    #[test]
    fn test_shard_key_is_char_based() {
        assert_eq!(DrugQuery::new("Ésomé").shard_key(), "és");
    }

    #[test]
    fn test_matches_ignores_separators_and_case() {
        for raw in ["Drug-Name", "drugname", "DRUG NAME"] {
            let query = DrugQuery::new(raw);
            assert!(query.matches("Drug Name"), "{raw} should match");
            assert!(query.matches("drug-name"), "{raw} should match");
            assert_eq!(query.shard_key(), "dr");
        }
    }

    #[test]
    fn test_matches_rejects_different_names() {
        let query = DrugQuery::new("aspirin");
        assert!(!query.matches("Aspirin / Caffeine"));
        assert!(!query.matches("aspirin-xr"));
        assert!(!query.matches(""));
    }
}
