//! Tool gateway HTTP server - main entry point.
//!
//! Serves the MCP JSON-RPC surface (`initialize`, `tools/list`,
//! `tools/call`) for the built-in catalog. Tool implementations are wired
//! by the embedding deployment; the stock binary serves catalog metadata
//! with an empty dispatch table.

use std::sync::Arc;

use toolgate::rpc::{Dispatcher, GatewayServer, StaticAuthenticator, ToolRegistry};
use toolgate::tools::builtin::{builtin_catalog, builtin_loadouts};
use toolgate::tools::{AccessClassifier, DocumentationManager, LoadoutRegistry};
use toolgate::GatewayConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize observability
    toolgate::observability::init_tracing();

    // Load configuration; environment overrides the defaults.
    let mut config = GatewayConfig::default();
    if let Ok(loadout) = std::env::var("TOOLGATE_LOADOUT") {
        config.tools.loadout = loadout;
    }
    if let Ok(addr) = std::env::var("TOOLGATE_LISTEN_ADDR") {
        config.server.listen_addr = addr;
    }

    // Build the shared catalog stack.
    let catalog = Arc::new(builtin_catalog()?);
    let classifier = Arc::new(AccessClassifier::from_catalog(&catalog));
    let loadouts = Arc::new(LoadoutRegistry::new(
        catalog.clone(),
        classifier,
        builtin_loadouts(),
    ));
    let docs = Arc::new(DocumentationManager::new(
        catalog.clone(),
        &config.tools.loadout,
    ));

    let dispatcher = Arc::new(Dispatcher::new(
        catalog,
        loadouts,
        docs,
        ToolRegistry::new(),
        Arc::new(StaticAuthenticator::local_dev()),
        config.tools.loadout.clone(),
    ));

    let server = GatewayServer::bind(&config.server.listen_addr, dispatcher).await?;
    tracing::info!(
        "🚀 Tool gateway starting on {} (loadout={})",
        server.local_addr()?,
        config.tools.loadout,
    );

    // Ctrl-C triggers graceful shutdown.
    let cancel = server.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            cancel.cancel();
        }
    });

    server.serve().await?;
    Ok(())
}
