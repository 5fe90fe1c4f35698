//! Tool metadata infrastructure — catalog, access classification, loadouts,
//! and verbosity-scaled documentation.
//!
//! Everything here is immutable, process-wide configuration: built once at
//! bootstrap, shared behind `Arc`, and never mutated afterward. Tool
//! *implementations* live behind the [`crate::rpc::Tool`] trait and are
//! supplied by the embedder; this module owns only metadata.

pub mod access;
pub mod builtin;
pub mod catalog;
pub mod docs;
pub mod loadouts;

pub use access::{AccessClassifier, AccessLevel, CapabilityFeature};
pub use catalog::{ParamSpec, ParamType, ToolCatalog, ToolDescriptor};
pub use docs::{DocumentationManager, VerbosityLevel};
pub use loadouts::{DeploymentMode, Loadout, LoadoutInfo, LoadoutRegistry};
