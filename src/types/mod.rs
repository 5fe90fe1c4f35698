//! Core types for the tool gateway.
//!
//! This module provides foundational types used throughout the system:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the gateway process

mod config;
mod errors;

pub use config::{GatewayConfig, ObservabilityConfig, ServerConfig, ToolsConfig};
pub use errors::{Error, Result};
