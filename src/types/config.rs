//! Configuration structures.
//!
//! Configuration is explicit: the process bootstrap (`main.rs`) owns any
//! environment reads and hands a fully built [`GatewayConfig`] to the
//! gateway. Nothing in the library consults the environment.

use serde::{Deserialize, Serialize};

/// Global gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Tool visibility and documentation configuration.
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// JSON-RPC endpoint bind address.
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Tool exposure configuration.
///
/// One value drives two independent computations: which tools are visible
/// (loadout resolution) and how verbosely each visible tool is documented
/// (documentation level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Name of the tool loadout to expose. Unknown names fall back to
    /// "full" at resolution time.
    pub loadout: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            loadout: "full".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = GatewayConfig::default();
        assert_eq!(config.tools.loadout, "full");
        assert_eq!(config.server.listen_addr, "127.0.0.1:8000");
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"tools":{"loadout":"minimal"}}"#).unwrap();
        assert_eq!(config.tools.loadout, "minimal");
        assert_eq!(config.server.listen_addr, "127.0.0.1:8000");
    }
}
