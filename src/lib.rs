//! # Toolgate - MCP Tool Gateway
//!
//! JSON-RPC 2.0 gateway exposing a curated tool catalog over HTTP:
//! - Tool catalog with parameter schemas and verbosity-scaled documentation
//! - Access classification (remote-safe / local-only / privileged)
//! - Named loadouts selecting which tools a deployment exposes
//! - Request dispatcher implementing `initialize`, `tools/list`, `tools/call`
//!
//! ## Architecture
//!
//! One configuration value — the loadout name — drives both tool visibility
//! and documentation verbosity:
//! ```text
//!   HTTP POST /mcp → GatewayServer → Dispatcher
//!                                      ├── Authenticator  (identity seam)
//!                                      ├── LoadoutRegistry → AccessClassifier
//!                                      ├── DocumentationManager → ToolCatalog
//!                                      └── ToolRegistry   (implementations)
//! ```
//!
//! All collaborators are injected at construction; the crate holds no
//! global state beyond the tracing subscriber.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod rpc;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Error, GatewayConfig, Result};
