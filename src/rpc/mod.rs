//! JSON-RPC 2.0 gateway layer.
//!
//! `envelope` owns the wire shapes, `dispatcher` owns per-request routing
//! (parse → authenticate → method dispatch → respond), and `server` wraps
//! the dispatcher in an axum HTTP transport.

pub mod dispatcher;
pub mod envelope;
pub mod server;

pub use dispatcher::{
    AuthenticatedContext, Authenticator, Dispatcher, RpcOutcome, StaticAuthenticator, Tool,
    ToolRegistry,
};
pub use server::GatewayServer;
