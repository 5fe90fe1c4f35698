//! Access classification — security levels and capability features per tool.
//!
//! Classification is a denylist: any name absent from the table classifies
//! as remote-safe. A newly added tool is remote-exposable until someone
//! explicitly marks it local-only or privileged. Do not invert this without
//! revisiting every deployment that relies on it.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::tools::catalog::ToolCatalog;

/// Security classification for tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Can be exposed over a network-facing deployment.
    RemoteSafe,
    /// Requires local filesystem or code-execution trust.
    LocalOnly,
    /// Requires admin access.
    Privileged,
}

/// Capability features a tool may carry. Used for introspection and tests,
/// not for runtime filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityFeature {
    /// Enriches calls with local context (e.g. git metadata) automatically.
    AutoContextEnrichment,
    /// Reads or writes the local filesystem.
    FilesystemAccess,
    /// Executes arbitrary code.
    CodeExecution,
    /// Publishes to an external message bus.
    ExternalBroadcast,
    /// Modifies the database.
    DatabaseWrite,
    /// Reads the database.
    DatabaseRead,
}

/// Read-only view over tool classifications, derived from the catalog at
/// bootstrap.
#[derive(Debug, Default)]
pub struct AccessClassifier {
    levels: HashMap<String, AccessLevel>,
    features: HashMap<String, HashSet<CapabilityFeature>>,
}

impl AccessClassifier {
    /// Build the classifier from catalog descriptors. The catalog is the
    /// single source of truth for classification.
    pub fn from_catalog(catalog: &ToolCatalog) -> Self {
        let mut levels = HashMap::new();
        let mut features = HashMap::new();
        for descriptor in catalog.descriptors() {
            levels.insert(descriptor.name.clone(), descriptor.access);
            if !descriptor.features.is_empty() {
                features.insert(descriptor.name.clone(), descriptor.features.clone());
            }
        }
        Self { levels, features }
    }

    /// Classify a tool. Unknown names default to remote-safe (fail-open).
    pub fn classify(&self, name: &str) -> AccessLevel {
        self.levels
            .get(name)
            .copied()
            .unwrap_or(AccessLevel::RemoteSafe)
    }

    /// Check if a tool can be exposed over a remote deployment.
    pub fn is_remote_safe(&self, name: &str) -> bool {
        self.classify(name) == AccessLevel::RemoteSafe
    }

    /// Check if a tool carries a specific capability feature.
    pub fn has_feature(&self, name: &str, feature: CapabilityFeature) -> bool {
        self.features
            .get(name)
            .map_or(false, |set| set.contains(&feature))
    }

    /// Inverted index: all tools carrying a feature, in stable order.
    pub fn tools_with_feature(&self, feature: CapabilityFeature) -> BTreeSet<String> {
        self.features
            .iter()
            .filter(|(_, set)| set.contains(&feature))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All tools classified local-only.
    pub fn local_only_tools(&self) -> BTreeSet<String> {
        self.levels
            .iter()
            .filter(|(_, level)| **level == AccessLevel::LocalOnly)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::builtin_catalog;

    fn classifier() -> AccessClassifier {
        AccessClassifier::from_catalog(&builtin_catalog().unwrap())
    }

    #[test]
    fn local_only_tools_are_classified() {
        let classifier = classifier();
        assert_eq!(classifier.classify("bring_your_own"), AccessLevel::LocalOnly);
        assert_eq!(classifier.classify("list_projects"), AccessLevel::LocalOnly);
        assert_eq!(classifier.classify("add_todo"), AccessLevel::RemoteSafe);
    }

    #[test]
    fn unknown_names_default_to_remote_safe() {
        // Fail-open denylist: unclassified names are exposable.
        let classifier = classifier();
        assert_eq!(
            classifier.classify("some_future_tool"),
            AccessLevel::RemoteSafe
        );
        assert!(classifier.is_remote_safe("some_future_tool"));
    }

    #[test]
    fn feature_lookup() {
        let classifier = classifier();
        assert!(classifier.has_feature("bring_your_own", CapabilityFeature::CodeExecution));
        assert!(classifier.has_feature("add_todo", CapabilityFeature::DatabaseWrite));
        assert!(!classifier.has_feature("add_todo", CapabilityFeature::CodeExecution));
        assert!(!classifier.has_feature("unknown_tool", CapabilityFeature::DatabaseRead));
    }

    #[test]
    fn feature_inverted_index() {
        let classifier = classifier();
        let code_exec = classifier.tools_with_feature(CapabilityFeature::CodeExecution);
        assert_eq!(code_exec.len(), 1);
        assert!(code_exec.contains("bring_your_own"));

        let writers = classifier.tools_with_feature(CapabilityFeature::DatabaseWrite);
        assert!(writers.contains("add_todo"));
        assert!(writers.contains("update_todo"));
        assert!(!writers.contains("query_todos"));
    }

    #[test]
    fn local_only_inventory() {
        let classifier = classifier();
        let local = classifier.local_only_tools();
        assert_eq!(local.len(), 2);
        assert!(local.contains("bring_your_own"));
        assert!(local.contains("list_projects"));
    }
}
