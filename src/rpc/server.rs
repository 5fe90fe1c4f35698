//! HTTP transport — axum front-end over the dispatcher.
//!
//! The transport is deliberately thin: it extracts the bearer token and raw
//! body, hands both to [`Dispatcher::handle`], and maps the outcome onto an
//! HTTP response. All protocol decisions live in the dispatcher.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::rpc::dispatcher::Dispatcher;
use crate::types::Result;

/// HTTP server wrapping the dispatcher.
#[derive(Debug)]
pub struct GatewayServer {
    listener: TcpListener,
    dispatcher: Arc<Dispatcher>,
    cancel: CancellationToken,
}

impl GatewayServer {
    /// Bind the listen socket. Binding eagerly (rather than inside `serve`)
    /// lets callers learn the actual port before the accept loop starts.
    pub async fn bind(addr: &str, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            dispatcher,
            cancel: CancellationToken::new(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Token that triggers graceful shutdown when cancelled. Clone it before
    /// calling [`serve`](Self::serve), which consumes the server.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the server until the cancel token fires or a fatal error occurs.
    pub async fn serve(self) -> Result<()> {
        let addr = self.listener.local_addr()?;
        let app = Router::new()
            .route("/mcp", post(handle_mcp))
            .route("/health", get(handle_health))
            .with_state(self.dispatcher);

        tracing::info!("Gateway listening on {}", addr);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(self.cancel.cancelled_owned())
            .await?;
        tracing::info!("Gateway shut down");
        Ok(())
    }
}

/// Pull the token out of an `Authorization: Bearer ...` header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

async fn handle_mcp(
    State(dispatcher): State<Arc<Dispatcher>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let token = bearer_token(&headers);
    let outcome = dispatcher.handle(&body, token.as_deref()).await;
    let status =
        StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome.body)).into_response()
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
