//! JSON-RPC 2.0 envelope construction.
//!
//! A response carries exactly one of `result`/`error`, never both. Every
//! helper here enforces that by construction.

use serde_json::{json, Value};

/// Invalid JSON was received by the server.
pub const PARSE_ERROR: i64 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i64 = -32600;
/// The method (or tool) does not exist.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Internal JSON-RPC error, including tool execution failures.
pub const INTERNAL_ERROR: i64 = -32603;

/// Protocol version advertised by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Build a success envelope.
pub fn success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Build an error envelope without data.
pub fn failure(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}

/// Build an error envelope carrying detail data.
pub fn failure_with_data(id: Value, code: i64, message: &str, data: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message, "data": data },
    })
}
