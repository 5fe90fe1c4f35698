//! Request dispatcher — the JSON-RPC gateway core.
//!
//! Stateless per request: parse → validate envelope → authenticate →
//! dispatch on method. All collaborators are injected at construction and
//! shared immutably across concurrent requests; the dispatcher holds no
//! mutable state of its own. Tool implementations and identity
//! verification live behind the [`Tool`] and [`Authenticator`] seams.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use crate::rpc::envelope::{self, PROTOCOL_VERSION};
use crate::tools::{DeploymentMode, DocumentationManager, LoadoutRegistry, ToolCatalog};
use crate::types::{Error, Result};

// =============================================================================
// Identity
// =============================================================================

/// Identity of the authenticated caller.
///
/// Constructed once per request by the server-side [`Authenticator`] and
/// passed to tool implementations. Never built from client-supplied data.
#[derive(Debug, Clone)]
pub struct AuthenticatedContext {
    /// Stable subject identifier (e.g. a JWT `sub` claim).
    pub subject: String,
    pub email: Option<String>,
    /// Remaining verified claims, as-is.
    pub claims: Map<String, Value>,
}

impl AuthenticatedContext {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            email: None,
            claims: Map::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_claim(mut self, key: &str, value: Value) -> Self {
        self.claims.insert(key.to_string(), value);
        self
    }
}

/// Resolves caller identity. Token parsing/verification mechanics live
/// outside this crate; the gateway only consumes the resulting identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Return the caller identity, or `None` when authentication fails.
    async fn authenticate(&self, bearer: Option<&str>) -> Option<AuthenticatedContext>;
}

/// Authenticator that accepts every request with a fixed identity.
///
/// The disabled-auth path for local development; production deployments
/// inject a real verifier instead.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    identity: AuthenticatedContext,
}

impl StaticAuthenticator {
    pub fn new(identity: AuthenticatedContext) -> Self {
        Self { identity }
    }

    /// Local-development identity with full permissions.
    pub fn local_dev() -> Self {
        Self::new(
            AuthenticatedContext::new("local_dev_user")
                .with_claim("permissions", json!(["*"])),
        )
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, _bearer: Option<&str>) -> Option<AuthenticatedContext> {
        Some(self.identity.clone())
    }
}

// =============================================================================
// Tool dispatch table
// =============================================================================

/// One invocable tool implementation.
///
/// Each implementation owns its own business logic, persistence, and side
/// effects, and validates its own arguments against its catalog schema at
/// its own boundary (see [`ToolCatalog::validate_args`]).
#[async_trait]
pub trait Tool: Send + Sync {
    /// Run the tool with sanitized arguments and the server-constructed
    /// caller context.
    async fn execute(&self, args: Map<String, Value>, ctx: &AuthenticatedContext)
        -> Result<Value>;
}

/// Dispatch table: tool name → implementation.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register an implementation under a tool name.
    pub fn register(&mut self, name: &str, tool: Arc<dyn Tool>) {
        self.tools.insert(name.to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Transport-level outcome of one request: HTTP status plus response body.
#[derive(Debug, Clone)]
pub struct RpcOutcome {
    pub status: u16,
    pub body: Value,
}

impl RpcOutcome {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

/// Build the transport outcome for a gateway error. The error variant owns
/// both the JSON-RPC code and the HTTP status.
fn error_outcome(id: Value, err: &Error, message: &str, data: Option<Value>) -> RpcOutcome {
    let body = match data {
        Some(data) => envelope::failure_with_data(id, err.rpc_code(), message, data),
        None => envelope::failure(id, err.rpc_code(), message),
    };
    RpcOutcome {
        status: err.http_status(),
        body,
    }
}

/// The JSON-RPC gateway. Composes catalog, loadout registry, documentation
/// manager, dispatch table, and authenticator per request.
pub struct Dispatcher {
    catalog: Arc<ToolCatalog>,
    loadouts: Arc<LoadoutRegistry>,
    docs: Arc<DocumentationManager>,
    registry: ToolRegistry,
    authenticator: Arc<dyn Authenticator>,
    /// Configured loadout name driving `tools/list` visibility.
    loadout: String,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("loadout", &self.loadout)
            .field("catalog_tools", &self.catalog.len())
            .field("implementations", &self.registry.len())
            .finish()
    }
}

impl Dispatcher {
    pub fn new(
        catalog: Arc<ToolCatalog>,
        loadouts: Arc<LoadoutRegistry>,
        docs: Arc<DocumentationManager>,
        registry: ToolRegistry,
        authenticator: Arc<dyn Authenticator>,
        loadout: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            loadouts,
            docs,
            registry,
            authenticator,
            loadout: loadout.into(),
        }
    }

    /// Handle one raw request body.
    ///
    /// Never fails: internal errors become a -32603 envelope with HTTP 500,
    /// matching the unhandled-exception path of the protocol contract.
    pub async fn handle(&self, body: &[u8], bearer: Option<&str>) -> RpcOutcome {
        match self.handle_inner(body, bearer).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Dispatcher failure: {}", e);
                let data = json!(e.to_string());
                error_outcome(Value::Null, &e, "Internal error", Some(data))
            }
        }
    }

    async fn handle_inner(&self, body: &[u8], bearer: Option<&str>) -> Result<RpcOutcome> {
        // 1. Parse
        let request: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                let err = Error::parse(e.to_string());
                return Ok(error_outcome(
                    Value::Null,
                    &err,
                    "Parse error",
                    Some(json!(e.to_string())),
                ));
            }
        };

        // 2. Envelope shape
        let Some(obj) = request.as_object() else {
            let err = Error::protocol("request body is not an object");
            return Ok(error_outcome(Value::Null, &err, "Invalid Request", None));
        };
        if !obj.contains_key("jsonrpc") {
            let id = obj.get("id").cloned().unwrap_or(Value::Null);
            let err = Error::protocol("missing jsonrpc field");
            return Ok(error_outcome(id, &err, "Invalid Request", None));
        }

        // 3. Identity. The auth-failure body is deliberately not JSON-RPC
        // shaped; clients depend on the current form.
        let Some(ctx) = self.authenticator.authenticate(bearer).await else {
            return Ok(RpcOutcome {
                status: 401,
                body: json!({"error": "Unauthorized"}),
            });
        };

        // 4. Method dispatch. Missing id echoes as 1.
        let id = obj.get("id").cloned().unwrap_or(json!(1));
        let method = obj.get("method").and_then(Value::as_str).unwrap_or("");
        let params = obj
            .get("params")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        tracing::info!(method = %method, subject = %ctx.subject, "MCP request");

        match method {
            "initialize" => Ok(RpcOutcome::ok(envelope::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                    "capabilities": { "tools": {}, "prompts": {}, "resources": {} },
                }),
            ))),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => Ok(self.handle_tool_call(id, params, &ctx).await?),
            other => {
                let err = Error::method_not_found(other);
                Ok(error_outcome(
                    id,
                    &err,
                    &format!("Method not found: {}", other),
                    None,
                ))
            }
        }
    }

    /// `tools/list` — always the network-safe view, regardless of how the
    /// gateway itself is hosted.
    fn handle_tools_list(&self, id: Value) -> Result<RpcOutcome> {
        let names = self.loadouts.resolve(&self.loadout, DeploymentMode::Remote);
        let mut tools = Vec::with_capacity(names.len());
        for name in names {
            // Catalog is authoritative; loadout strays are skipped.
            let Some(descriptor) = self.catalog.get(&name) else {
                continue;
            };
            let mut description = self.docs.description(&name);
            if let Some(hint) = self.docs.parameter_hint(&name) {
                description.push_str("\n\n");
                description.push_str(&hint);
            }
            tools.push(json!({
                "name": name,
                "description": description,
                "inputSchema": descriptor.input_schema(),
            }));
        }
        Ok(RpcOutcome::ok(envelope::success(
            id,
            json!({ "tools": tools }),
        )))
    }

    /// `tools/call` — sanitize arguments, route to the implementation, and
    /// translate its result or failure into an envelope.
    async fn handle_tool_call(
        &self,
        id: Value,
        params: Map<String, Value>,
        ctx: &AuthenticatedContext,
    ) -> Result<RpcOutcome> {
        let name = params.get("name").and_then(Value::as_str).unwrap_or("");
        let mut args = params
            .get("arguments")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        // The server always constructs its own context; a client-supplied
        // one is never trusted.
        if args.remove("ctx").is_some() {
            tracing::warn!(tool = %name, "Discarding client-supplied ctx argument");
        }

        let Some(tool) = self.registry.get(name) else {
            let err = Error::method_not_found(name);
            return Ok(error_outcome(
                id,
                &err,
                &format!("Method not found: {}", name),
                None,
            ));
        };

        match tool.execute(args, ctx).await {
            Ok(output) => {
                let text = serde_json::to_string(&output)?;
                Ok(RpcOutcome::ok(envelope::success(
                    id,
                    json!({ "content": [{ "type": "text", "text": text }] }),
                )))
            }
            Err(e) => {
                tracing::error!(tool = %name, "Tool execution error: {}", e);
                // Every tool failure travels as an execution error, whatever
                // variant the implementation surfaced. Message rides in data:
                // callers are authenticated and trusted with debugging detail.
                let err = Error::tool_execution(e.to_string());
                Ok(error_outcome(
                    id,
                    &err,
                    "Internal error",
                    Some(json!(e.to_string())),
                ))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::{builtin_catalog, builtin_loadouts};
    use crate::tools::AccessClassifier;
    use std::sync::Mutex;

    /// Tool that records what it was invoked with.
    #[derive(Debug, Default)]
    struct CapturingTool {
        seen: Mutex<Option<(Map<String, Value>, String)>>,
    }

    #[async_trait]
    impl Tool for CapturingTool {
        async fn execute(
            &self,
            args: Map<String, Value>,
            ctx: &AuthenticatedContext,
        ) -> Result<Value> {
            *self.seen.lock().unwrap() = Some((args, ctx.subject.clone()));
            Ok(json!({"success": true}))
        }
    }

    #[derive(Debug)]
    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        async fn execute(
            &self,
            _args: Map<String, Value>,
            _ctx: &AuthenticatedContext,
        ) -> Result<Value> {
            Err(Error::tool_execution("database offline"))
        }
    }

    #[derive(Debug)]
    struct DenyAll;

    #[async_trait]
    impl Authenticator for DenyAll {
        async fn authenticate(&self, _bearer: Option<&str>) -> Option<AuthenticatedContext> {
            None
        }
    }

    fn dispatcher_with(
        loadout: &str,
        registry: ToolRegistry,
        authenticator: Arc<dyn Authenticator>,
    ) -> Dispatcher {
        let catalog = Arc::new(builtin_catalog().unwrap());
        let classifier = Arc::new(AccessClassifier::from_catalog(&catalog));
        let loadouts = Arc::new(LoadoutRegistry::new(
            catalog.clone(),
            classifier,
            builtin_loadouts(),
        ));
        let docs = Arc::new(DocumentationManager::new(catalog.clone(), loadout));
        Dispatcher::new(catalog, loadouts, docs, registry, authenticator, loadout)
    }

    fn dispatcher(loadout: &str) -> Dispatcher {
        dispatcher_with(
            loadout,
            ToolRegistry::new(),
            Arc::new(StaticAuthenticator::local_dev()),
        )
    }

    async fn post(dispatcher: &Dispatcher, body: &str) -> RpcOutcome {
        dispatcher.handle(body.as_bytes(), None).await
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let outcome = post(&dispatcher("full"), "{not json").await;
        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.body["error"]["code"], -32700);
        assert_eq!(outcome.body["id"], Value::Null);
    }

    #[tokio::test]
    async fn missing_jsonrpc_key_is_invalid_request() {
        let outcome = post(&dispatcher("full"), r#"{"id": 5, "method": "tools/list"}"#).await;
        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.body["error"]["code"], -32600);
        assert_eq!(outcome.body["id"], 5);
    }

    #[tokio::test]
    async fn non_object_body_is_invalid_request() {
        let outcome = post(&dispatcher("full"), "[1, 2, 3]").await;
        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.body["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn auth_failure_is_plain_401() {
        let d = dispatcher_with("full", ToolRegistry::new(), Arc::new(DenyAll));
        let outcome = post(&d, r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#).await;
        assert_eq!(outcome.status, 401);
        // Not JSON-RPC shaped, by contract.
        assert_eq!(outcome.body, json!({"error": "Unauthorized"}));
    }

    #[tokio::test]
    async fn initialize_reports_capabilities() {
        let outcome = post(
            &dispatcher("full"),
            r#"{"jsonrpc":"2.0","id":9,"method":"initialize"}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        let result = &outcome.body["result"];
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "toolgate");
        assert!(result["capabilities"]["tools"].is_object());
        assert_eq!(outcome.body["id"], 9);
    }

    #[tokio::test]
    async fn tools_list_is_remote_filtered() {
        let outcome = post(
            &dispatcher("full"),
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        let tools = outcome.body["result"]["tools"].as_array().unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert!(names.contains(&"add_todo"));
        assert!(!names.contains(&"bring_your_own"));
        assert!(!names.contains(&"list_projects"));
        assert_eq!(names.len(), 28);
    }

    #[tokio::test]
    async fn tools_list_entries_carry_schema_and_docs() {
        let outcome = post(
            &dispatcher("full"),
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
        )
        .await;
        let tools = outcome.body["result"]["tools"].as_array().unwrap();
        let add_todo = tools.iter().find(|t| t["name"] == "add_todo").unwrap();
        assert_eq!(add_todo["inputSchema"]["type"], "object");
        assert!(add_todo["inputSchema"]["properties"]["description"].is_object());
        // Full verbosity appends the parameter hint.
        let description = add_todo["description"].as_str().unwrap();
        assert!(description.contains("TodoMetadata"));
        assert!(description.contains("Parameters:"));
    }

    #[tokio::test]
    async fn tools_list_skips_catalog_unknown_names() {
        let outcome = post(
            &dispatcher("hybrid_test"),
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
        )
        .await;
        let tools = outcome.body["result"]["tools"].as_array().unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["add_todo", "query_todos", "get_todo", "mark_todo_complete"]
        );
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let outcome = post(
            &dispatcher("full"),
            r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.body["error"]["code"], -32601);
        assert_eq!(outcome.body["id"], 3);
    }

    #[tokio::test]
    async fn missing_id_defaults_to_one() {
        let outcome = post(
            &dispatcher("full"),
            r#"{"jsonrpc":"2.0","method":"no/such"}"#,
        )
        .await;
        assert_eq!(outcome.body["id"], 1);
    }

    #[tokio::test]
    async fn tool_call_unknown_tool_is_method_not_found() {
        let outcome = post(
            &dispatcher("full"),
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"add_todo","arguments":{}}}"#,
        )
        .await;
        // Catalog knows add_todo, but no implementation is registered.
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.body["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn tool_call_invokes_implementation() {
        let tool = Arc::new(CapturingTool::default());
        let mut registry = ToolRegistry::new();
        registry.register("add_todo", tool.clone());
        let d = dispatcher_with(
            "full",
            registry,
            Arc::new(StaticAuthenticator::local_dev()),
        );

        let outcome = post(
            &d,
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"add_todo","arguments":{"description":"x","project":"y"}}}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        let content = &outcome.body["result"]["content"][0];
        assert_eq!(content["type"], "text");
        let payload: Value = serde_json::from_str(content["text"].as_str().unwrap()).unwrap();
        assert_eq!(payload["success"], true);

        let seen = tool.seen.lock().unwrap();
        let (args, subject) = seen.as_ref().unwrap();
        assert_eq!(args["description"], "x");
        assert_eq!(subject, "local_dev_user");
    }

    #[tokio::test]
    async fn tool_call_strips_client_supplied_ctx() {
        let tool = Arc::new(CapturingTool::default());
        let mut registry = ToolRegistry::new();
        registry.register("get_todo", tool.clone());
        let d = dispatcher_with(
            "full",
            registry,
            Arc::new(StaticAuthenticator::new(AuthenticatedContext::new(
                "server-identity",
            ))),
        );

        let outcome = post(
            &d,
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"get_todo","arguments":{"todo_id":"t1","ctx":{"user":"spoofed-admin"}}}}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);

        let seen = tool.seen.lock().unwrap();
        let (args, subject) = seen.as_ref().unwrap();
        assert!(!args.contains_key("ctx"), "client ctx must be discarded");
        assert_eq!(args["todo_id"], "t1");
        assert_eq!(subject, "server-identity");
    }

    #[tokio::test]
    async fn tool_failure_surfaces_message_as_data() {
        let mut registry = ToolRegistry::new();
        registry.register("delete_todo", Arc::new(FailingTool));
        let d = dispatcher_with(
            "full",
            registry,
            Arc::new(StaticAuthenticator::local_dev()),
        );

        let outcome = post(
            &d,
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"delete_todo","arguments":{"todo_id":"t1"}}}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.body["error"]["code"], -32603);
        assert_eq!(outcome.body["error"]["message"], "Internal error");
        assert!(outcome.body["error"]["data"]
            .as_str()
            .unwrap()
            .contains("database offline"));
        assert_eq!(outcome.body["id"], 4);
    }

    #[tokio::test]
    async fn tool_failure_variant_does_not_change_wire_contract() {
        // Whatever error variant a tool returns, the response stays an
        // execution-error envelope over HTTP 200.
        #[derive(Debug)]
        struct InternalFailure;

        #[async_trait]
        impl Tool for InternalFailure {
            async fn execute(
                &self,
                _args: Map<String, Value>,
                _ctx: &AuthenticatedContext,
            ) -> Result<Value> {
                Err(Error::internal("state corrupted"))
            }
        }

        let mut registry = ToolRegistry::new();
        registry.register("explain", Arc::new(InternalFailure));
        let d = dispatcher_with(
            "full",
            registry,
            Arc::new(StaticAuthenticator::local_dev()),
        );

        let outcome = post(
            &d,
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"explain","arguments":{"topic":"x"}}}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.body["error"]["code"], -32603);
        assert!(outcome.body["error"]["data"]
            .as_str()
            .unwrap()
            .contains("state corrupted"));
    }

    #[tokio::test]
    async fn tool_call_default_arguments_is_empty_map() {
        let tool = Arc::new(CapturingTool::default());
        let mut registry = ToolRegistry::new();
        registry.register("list_lessons", tool.clone());
        let d = dispatcher_with(
            "full",
            registry,
            Arc::new(StaticAuthenticator::local_dev()),
        );

        let outcome = post(
            &d,
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"list_lessons"}}"#,
        )
        .await;
        assert_eq!(outcome.status, 200);
        let seen = tool.seen.lock().unwrap();
        let (args, _) = seen.as_ref().unwrap();
        assert!(args.is_empty());
    }
}
