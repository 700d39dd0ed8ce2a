//! The set of category labels available to a session.

use crate::errors::{LedgerError, LedgerResult};

/// Categories every session starts with. They cannot be removed.
pub const PREDEFINED_CATEGORIES: [&str; 6] = [
    "Groceries",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Bills",
    "Other",
];

/// Label that unknown categories fall back to unless configured otherwise.
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Other";

/// Outcome of checking a typed category against the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    /// The name matched a label; carries the label's canonical spelling.
    Known(String),
    /// No label matched; carries the trimmed input.
    Unknown(String),
}

/// Predefined and custom category labels.
///
/// Labels are unique across both subsets, compared trimmed and
/// ASCII-case-insensitively.
#[derive(Debug, Clone)]
pub struct CategorySet {
    predefined: Vec<String>,
    custom: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySet {
    pub fn new() -> Self {
        Self {
            predefined: PREDEFINED_CATEGORIES.iter().map(|name| name.to_string()).collect(),
            custom: Vec::new(),
        }
    }

    pub fn add_custom(&mut self, name: &str) -> LedgerResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return Err(LedgerError::DuplicateCategory(trimmed.to_string()));
        }
        self.custom.push(trimmed.to_string());
        Ok(trimmed.to_string())
    }

    pub fn remove_custom(&mut self, name: &str) -> LedgerResult<String> {
        let trimmed = name.trim();
        let position = self
            .custom
            .iter()
            .position(|label| same_label(label, trimmed))
            .ok_or_else(|| LedgerError::CategoryNotFound(trimmed.to_string()))?;
        Ok(self.custom.remove(position))
    }

    pub fn resolve(&self, name: &str) -> CategoryMatch {
        let trimmed = name.trim();
        match self.iter().find(|label| same_label(label, trimmed)) {
            Some(label) => CategoryMatch::Known(label.to_string()),
            None => CategoryMatch::Unknown(trimmed.to_string()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        matches!(self.resolve(name), CategoryMatch::Known(_))
    }

    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.iter().any(|label| same_label(label, name.trim()))
    }

    /// Predefined labels followed by custom labels, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.predefined
            .iter()
            .chain(self.custom.iter())
            .map(String::as_str)
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    pub fn len(&self) -> usize {
        self.predefined.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn same_label(label: &str, candidate: &str) -> bool {
    label.trim().eq_ignore_ascii_case(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_predefined_labels() {
        let set = CategorySet::new();
        let labels: Vec<&str> = set.iter().collect();
        assert_eq!(labels, PREDEFINED_CATEGORIES);
        assert!(set.custom().is_empty());
    }

    #[test]
    fn add_rejects_duplicates_across_subsets() {
        let mut set = CategorySet::new();
        assert_eq!(set.add_custom("  Gifts ").unwrap(), "Gifts");
        assert_eq!(
            set.add_custom("gifts"),
            Err(LedgerError::DuplicateCategory("gifts".into()))
        );
        assert_eq!(
            set.add_custom("groceries"),
            Err(LedgerError::DuplicateCategory("groceries".into()))
        );
    }

    #[test]
    fn add_rejects_blank_names() {
        let mut set = CategorySet::new();
        assert!(matches!(
            set.add_custom("   "),
            Err(LedgerError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn predefined_labels_cannot_be_removed() {
        let mut set = CategorySet::new();
        assert_eq!(
            set.remove_custom("Groceries"),
            Err(LedgerError::CategoryNotFound("Groceries".into()))
        );
        set.add_custom("Pets").unwrap();
        assert_eq!(set.remove_custom("pets").unwrap(), "Pets");
        assert!(!set.contains("Pets"));
    }

    #[test]
    fn resolve_returns_canonical_spelling() {
        let set = CategorySet::new();
        assert_eq!(
            set.resolve(" transportation"),
            CategoryMatch::Known("Transportation".into())
        );
        assert_eq!(set.resolve("Travel "), CategoryMatch::Unknown("Travel".into()));
    }
}
