//! Aggregated project overview returned to callers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Accumulates the builders and perspectives detected for a project.
///
/// Both collections have set semantics and render in ascending lexicographic
/// order. When serialized, an empty collection is omitted entirely rather
/// than emitted as an empty array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOverview {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    builders: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    perspectives: BTreeSet<String>,
}

impl ProjectOverview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_builder(&mut self, builder: impl Into<String>) {
        self.builders.insert(builder.into());
    }

    pub fn add_perspective(&mut self, perspective: impl Into<String>) {
        self.perspectives.insert(perspective.into());
    }

    pub fn builders(&self) -> &BTreeSet<String> {
        &self.builders
    }

    pub fn perspectives(&self) -> &BTreeSet<String> {
        &self.perspectives
    }

    pub fn set_builders(&mut self, builders: BTreeSet<String>) {
        self.builders = builders;
    }

    pub fn set_perspectives(&mut self, perspectives: BTreeSet<String>) {
        self.perspectives = perspectives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_builder_is_idempotent() {
        let mut overview = ProjectOverview::new();
        overview.add_builder("maven");
        overview.add_builder("maven");

        assert_eq!(overview.builders().len(), 1);
        assert!(overview.builders().contains("maven"));
    }

    #[test]
    fn test_builders_are_sorted() {
        let mut overview = ProjectOverview::new();
        overview.add_builder("npm");
        overview.add_builder("maven");

        let builders: Vec<&str> = overview.builders().iter().map(String::as_str).collect();
        assert_eq!(builders, vec!["maven", "npm"]);
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let overview = ProjectOverview::new();
        let json = serde_json::to_value(&overview).unwrap();

        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_set_builders_replaces_wholesale() {
        let mut overview = ProjectOverview::new();
        overview.add_builder("maven");

        overview.set_builders(BTreeSet::from(["gradle".to_string()]));
        assert_eq!(overview.builders().len(), 1);
        assert!(overview.builders().contains("gradle"));
    }

    #[test]
    fn test_absent_fields_deserialize_empty() {
        let overview: ProjectOverview = serde_json::from_str("{}").unwrap();
        assert!(overview.builders().is_empty());
        assert!(overview.perspectives().is_empty());
    }

    #[test]
    fn test_debug_lists_both_collections() {
        let mut overview = ProjectOverview::new();
        overview.add_builder("maven");
        overview.add_perspective("forge");

        let repr = format!("{:?}", overview);
        assert!(repr.contains("builders"));
        assert!(repr.contains("perspectives"));
        assert!(repr.contains("maven"));
        assert!(repr.contains("forge"));
    }
}
