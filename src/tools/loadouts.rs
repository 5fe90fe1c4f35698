//! Loadout registry — named, ordered tool lists resolved per deployment mode.
//!
//! A loadout is a curated subset of the catalog exposed to a given client
//! configuration. Resolution is infallible: unknown loadout names fall back
//! to "full", and tool names the catalog does not know are dropped silently
//! (the catalog is authoritative).

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::tools::access::AccessClassifier;
use crate::tools::catalog::ToolCatalog;

/// Where the gateway is hosted. Remote deployments only see remote-safe
/// tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Local,
    Remote,
}

/// A named, ordered tool list. Order is significant — it defines the
/// client-visible ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loadout {
    pub name: String,
    pub tools: Vec<String>,
    pub description: String,
}

impl Loadout {
    pub fn new(name: &str, description: &str, tools: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
            description: description.to_string(),
        }
    }
}

/// Introspection view of a loadout.
#[derive(Debug, Clone, Serialize)]
pub struct LoadoutInfo {
    pub name: String,
    pub tool_count: usize,
    pub tools: Vec<String>,
    pub description: String,
}

/// Fixed set of named loadouts, resolved against the catalog and classifier.
#[derive(Debug)]
pub struct LoadoutRegistry {
    loadouts: HashMap<String, Loadout>,
    catalog: Arc<ToolCatalog>,
    classifier: Arc<AccessClassifier>,
}

impl LoadoutRegistry {
    pub fn new(
        catalog: Arc<ToolCatalog>,
        classifier: Arc<AccessClassifier>,
        loadouts: Vec<Loadout>,
    ) -> Self {
        let loadouts = loadouts
            .into_iter()
            .map(|l| (l.name.clone(), l))
            .collect();
        Self {
            loadouts,
            catalog,
            classifier,
        }
    }

    /// Resolve a loadout to the concrete, mode-filtered tool list.
    ///
    /// Unknown loadout names fall back to "full". Names absent from the
    /// catalog are dropped. Remote mode additionally drops every tool not
    /// classified remote-safe. Original order is preserved throughout.
    pub fn resolve(&self, loadout_name: &str, mode: DeploymentMode) -> Vec<String> {
        let loadout = match self.loadouts.get(loadout_name) {
            Some(l) => l,
            None => match self.loadouts.get("full") {
                Some(full) => full,
                None => return Vec::new(),
            },
        };

        loadout
            .tools
            .iter()
            .filter(|name| self.catalog.contains(name))
            .filter(|name| {
                mode == DeploymentMode::Local || self.classifier.is_remote_safe(name)
            })
            .cloned()
            .collect()
    }

    /// Introspection metadata for a loadout. Unknown names yield an empty
    /// listing rather than an error.
    pub fn info(&self, loadout_name: &str) -> LoadoutInfo {
        match self.loadouts.get(loadout_name) {
            Some(loadout) => LoadoutInfo {
                name: loadout.name.clone(),
                tool_count: loadout.tools.len(),
                tools: loadout.tools.clone(),
                description: loadout.description.clone(),
            },
            None => LoadoutInfo {
                name: loadout_name.to_string(),
                tool_count: 0,
                tools: Vec::new(),
                description: "Custom loadout".to_string(),
            },
        }
    }

    /// All loadout names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loadouts.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::{builtin_catalog, builtin_loadouts};

    fn registry() -> LoadoutRegistry {
        let catalog = Arc::new(builtin_catalog().unwrap());
        let classifier = Arc::new(AccessClassifier::from_catalog(&catalog));
        LoadoutRegistry::new(catalog, classifier, builtin_loadouts())
    }

    #[test]
    fn minimal_loadout_order_is_preserved() {
        let registry = registry();
        assert_eq!(
            registry.resolve("minimal", DeploymentMode::Local),
            vec!["add_todo", "query_todos", "get_todo", "mark_todo_complete"]
        );
    }

    #[test]
    fn remote_resolution_is_subset_of_local() {
        let registry = registry();
        for name in registry.names() {
            let local = registry.resolve(&name, DeploymentMode::Local);
            let remote = registry.resolve(&name, DeploymentMode::Remote);
            for tool in &remote {
                assert!(
                    local.contains(tool),
                    "loadout '{}': '{}' in remote but not local",
                    name,
                    tool
                );
            }
        }
    }

    #[test]
    fn local_only_tools_never_resolve_remotely() {
        let registry = registry();
        for name in registry.names() {
            let remote = registry.resolve(&name, DeploymentMode::Remote);
            assert!(!remote.contains(&"bring_your_own".to_string()), "loadout {}", name);
            assert!(!remote.contains(&"list_projects".to_string()), "loadout {}", name);
        }
    }

    #[test]
    fn full_remote_keeps_remote_safe_tools() {
        let registry = registry();
        let remote = registry.resolve("full", DeploymentMode::Remote);
        let local = registry.resolve("full", DeploymentMode::Local);
        assert!(remote.contains(&"add_todo".to_string()));
        assert_eq!(local.len(), remote.len() + 2);
    }

    #[test]
    fn unknown_loadout_falls_back_to_full() {
        let registry = registry();
        assert_eq!(
            registry.resolve("nonexistent-loadout", DeploymentMode::Local),
            registry.resolve("full", DeploymentMode::Local)
        );
    }

    #[test]
    fn catalog_unknown_names_are_dropped() {
        // hybrid_test references two legacy tools the catalog never had.
        let registry = registry();
        let resolved = registry.resolve("hybrid_test", DeploymentMode::Local);
        assert_eq!(
            resolved,
            vec!["add_todo", "query_todos", "get_todo", "mark_todo_complete"]
        );
    }

    #[test]
    fn info_reports_declared_tools() {
        let registry = registry();
        let info = registry.info("minimal");
        assert_eq!(info.name, "minimal");
        assert_eq!(info.tool_count, 4);
        assert_eq!(info.tools.len(), 4);

        let unknown = registry.info("made-up");
        assert_eq!(unknown.tool_count, 0);
        assert_eq!(unknown.description, "Custom loadout");
    }
}
