//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and carry
//! enough context to be surfaced as JSON-RPC error objects. Two failure
//! layers are kept distinct: transport-level outcomes map to HTTP status
//! codes, protocol/application outcomes map to JSON-RPC error codes.

use thiserror::Error;

use crate::rpc::envelope;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// Request body is not valid JSON (JSON-RPC -32700, HTTP 400).
    #[error("parse error: {0}")]
    Parse(String),

    /// Envelope is structurally invalid (JSON-RPC -32600, HTTP 400).
    #[error("invalid request: {0}")]
    Protocol(String),

    /// Caller identity could not be established (HTTP 401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Unknown method or unknown tool (JSON-RPC -32601, HTTP 200).
    #[error("method not found: {0}")]
    MethodNotFound(String),

    /// A tool implementation failed (JSON-RPC -32603, HTTP 200).
    #[error("tool execution error: {0}")]
    ToolExecution(String),

    /// Internal gateway failure (JSON-RPC -32603, HTTP 500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// JSON-RPC error code for this error.
    pub fn rpc_code(&self) -> i64 {
        match self {
            Error::Parse(_) => envelope::PARSE_ERROR,
            Error::Protocol(_) => envelope::INVALID_REQUEST,
            Error::MethodNotFound(_) => envelope::METHOD_NOT_FOUND,
            Error::Unauthorized(_)
            | Error::ToolExecution(_)
            | Error::Internal(_)
            | Error::Serialization(_)
            | Error::Io(_) => envelope::INTERNAL_ERROR,
        }
    }

    /// HTTP status code for this error. JSON-RPC-level failures (unknown
    /// method/tool, tool exception) travel as HTTP 200 with an error
    /// envelope; only transport-level failures change the status.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Parse(_) | Error::Protocol(_) => 400,
            Error::Unauthorized(_) => 401,
            Error::MethodNotFound(_) | Error::ToolExecution(_) => 200,
            Error::Internal(_) | Error::Serialization(_) | Error::Io(_) => 500,
        }
    }
}

// Convenience constructors
impl Error {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn method_not_found(msg: impl Into<String>) -> Self {
        Self::MethodNotFound(msg.into())
    }

    pub fn tool_execution(msg: impl Into<String>) -> Self {
        Self::ToolExecution(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
