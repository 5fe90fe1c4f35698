//! Documentation manager — verbosity-scaled tool documentation.
//!
//! One configuration value (the loadout name) drives both tool visibility
//! and documentation verbosity, but the two computations are independent:
//! the loadout registry decides *which* tools are visible, this component
//! decides *how much* text each visible tool ships with. The point is to
//! let integrators trade context-window budget against guidance richness
//! without a code change.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::tools::catalog::ToolCatalog;

/// Sentinel returned for tools the catalog does not know.
pub const DOC_NOT_FOUND: &str = "Tool documentation not found.";

/// Documentation detail tier. Ordering matters: description length is
/// non-decreasing as the level rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbosityLevel {
    /// Tool name + core function only.
    Minimal,
    /// Ultra-concise docs (one line + essential params).
    Basic,
    /// Administrative context.
    Admin,
    /// Comprehensive docs with examples and field descriptions.
    Full,
}

impl VerbosityLevel {
    /// Map a loadout name to its documentation level. Lighter loadouts
    /// collapse to Basic; anything unrecognized collapses to Full.
    pub fn for_loadout(loadout: &str) -> Self {
        match loadout {
            "minimal" => VerbosityLevel::Minimal,
            "basic" | "lessons" | "hybrid_test" => VerbosityLevel::Basic,
            "admin" => VerbosityLevel::Admin,
            _ => VerbosityLevel::Full,
        }
    }
}

/// Serves description and parameter-hint text at a fixed verbosity level.
#[derive(Debug)]
pub struct DocumentationManager {
    catalog: Arc<ToolCatalog>,
    level: VerbosityLevel,
}

impl DocumentationManager {
    /// Build a manager for the given loadout configuration.
    pub fn new(catalog: Arc<ToolCatalog>, loadout: &str) -> Self {
        Self {
            level: VerbosityLevel::for_loadout(loadout),
            catalog,
        }
    }

    /// The active documentation level.
    pub fn level(&self) -> VerbosityLevel {
        self.level
    }

    /// Description text for a tool at the active level.
    ///
    /// Falls back to the Full variant when the level has no text, and to a
    /// fixed sentinel when the tool is unknown. Never fails.
    pub fn description(&self, name: &str) -> String {
        let Some(descriptor) = self.catalog.get(name) else {
            return DOC_NOT_FOUND.to_string();
        };
        descriptor
            .docs
            .get(&self.level)
            .or_else(|| descriptor.docs.get(&VerbosityLevel::Full))
            .cloned()
            .unwrap_or_else(|| DOC_NOT_FOUND.to_string())
    }

    /// Parameter-hint text for a tool, if the level carries one.
    ///
    /// Minimal level returns nothing unconditionally — a hard token-budget
    /// cutoff, independent of whether a hint exists. Other levels fall back
    /// to the Basic hint.
    pub fn parameter_hint(&self, name: &str) -> Option<String> {
        if self.level == VerbosityLevel::Minimal {
            return None;
        }
        let descriptor = self.catalog.get(name)?;
        descriptor
            .hints
            .get(&self.level)
            .or_else(|| descriptor.hints.get(&VerbosityLevel::Basic))
            .cloned()
    }
}
