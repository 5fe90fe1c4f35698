//! Tool catalog — the single source of truth for tool metadata.
//!
//! Owns tool names, input schemas, documentation variants, and security
//! classification. Implementations live elsewhere; every other component
//! (classifier, loadout registry, documentation manager, dispatcher) treats
//! the catalog as read-only.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::tools::access::{AccessLevel, CapabilityFeature};
use crate::tools::docs::VerbosityLevel;
use crate::types::Error;

// =============================================================================
// Parameter types
// =============================================================================

/// JSON type of a tool input parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamType {
    /// JSON Schema type name.
    pub fn json_name(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
            ParamType::Array => "array",
        }
    }

    /// Check a JSON value against this type.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::Number => value.is_number(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::Object => value.is_object(),
            ParamType::Array => value.is_array(),
        }
    }
}

fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single parameter definition for a tool. Order of definition is the
/// order surfaced to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
}

// =============================================================================
// Tool descriptor
// =============================================================================

/// Complete catalog entry for one tool: schema, documentation variants,
/// and security classification.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: String,
    /// One-line summary, independent of verbosity level.
    pub summary: String,
    pub params: Vec<ParamSpec>,
    /// Description text per verbosity level. Minimal and Full are mandatory.
    pub docs: BTreeMap<VerbosityLevel, String>,
    /// Optional parameter-hint text per verbosity level.
    pub hints: BTreeMap<VerbosityLevel, String>,
    pub access: AccessLevel,
    pub features: HashSet<CapabilityFeature>,
}

impl ToolDescriptor {
    /// Start a descriptor with no parameters, docs, or features.
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        access: AccessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            params: Vec::new(),
            docs: BTreeMap::new(),
            hints: BTreeMap::new(),
            access,
            features: HashSet::new(),
        }
    }

    /// Append a parameter definition (order is client-visible).
    pub fn param(
        mut self,
        name: &str,
        param_type: ParamType,
        description: &str,
        required: bool,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.to_string(),
            param_type,
            description: description.to_string(),
            required,
        });
        self
    }

    /// Set the description text for one verbosity level.
    pub fn doc(mut self, level: VerbosityLevel, text: &str) -> Self {
        self.docs.insert(level, text.to_string());
        self
    }

    /// Set the parameter-hint text for one verbosity level.
    pub fn hint(mut self, level: VerbosityLevel, text: &str) -> Self {
        self.hints.insert(level, text.to_string());
        self
    }

    /// Tag a capability feature.
    pub fn feature(mut self, feature: CapabilityFeature) -> Self {
        self.features.insert(feature);
        self
    }

    /// Render the input schema as a JSON-Schema style object.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for p in &self.params {
            properties.insert(
                p.name.clone(),
                json!({
                    "type": p.param_type.json_name(),
                    "description": p.description,
                }),
            );
            if p.required {
                required.push(Value::String(p.name.clone()));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(schema)
    }
}

// =============================================================================
// Tool catalog
// =============================================================================

/// In-memory tool catalog. Pure lookup table — no mutation after startup,
/// no errors beyond absence.
#[derive(Debug, Default)]
pub struct ToolCatalog {
    entries: HashMap<String, ToolDescriptor>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a descriptor. Every descriptor must carry at least the
    /// Minimal and Full documentation variants.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> crate::types::Result<()> {
        if descriptor.name.is_empty() {
            return Err(Error::internal("tool name cannot be empty"));
        }
        if !descriptor.docs.contains_key(&VerbosityLevel::Minimal)
            || !descriptor.docs.contains_key(&VerbosityLevel::Full)
        {
            return Err(Error::internal(format!(
                "tool '{}' must define minimal and full documentation variants",
                descriptor.name
            )));
        }
        self.entries.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Get a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.entries.get(name)
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All tool names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// All descriptors, sorted by name.
    pub fn descriptors(&self) -> Vec<&ToolDescriptor> {
        let mut entries: Vec<&ToolDescriptor> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Validate call arguments against a tool's input schema.
    ///
    /// Returns a list of validation errors (empty = valid). Tools own the
    /// decision of whether to reject; the gateway only reports.
    pub fn validate_args(
        &self,
        name: &str,
        args: &Map<String, Value>,
    ) -> crate::types::Result<Vec<String>> {
        let descriptor = self
            .entries
            .get(name)
            .ok_or_else(|| Error::method_not_found(format!("Unknown tool: {}", name)))?;

        let mut errors = Vec::new();

        for spec in &descriptor.params {
            if spec.required && !args.contains_key(&spec.name) {
                errors.push(format!("Missing required parameter: {}", spec.name));
            }
        }

        let known: HashMap<&str, &ParamSpec> = descriptor
            .params
            .iter()
            .map(|p| (p.name.as_str(), p))
            .collect();

        for (key, value) in args {
            match known.get(key.as_str()) {
                Some(spec) => {
                    if !value.is_null() && !spec.param_type.matches(value) {
                        errors.push(format!(
                            "Parameter '{}': expected {}, got {}",
                            key,
                            spec.param_type.json_name(),
                            value_type_name(value)
                        ));
                    }
                }
                None => errors.push(format!("Unknown parameter: {}", key)),
            }
        }

        Ok(errors)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_descriptor() -> ToolDescriptor {
        ToolDescriptor::new("add_todo", "Create a new todo item", AccessLevel::RemoteSafe)
            .param("description", ParamType::String, "Task description", true)
            .param("project", ParamType::String, "Project name", true)
            .param("priority", ParamType::String, "Priority level", false)
            .doc(VerbosityLevel::Minimal, "Create task")
            .doc(VerbosityLevel::Full, "Creates a task in the specified project.")
            .feature(CapabilityFeature::DatabaseWrite)
    }

    #[test]
    fn register_and_get() {
        let mut catalog = ToolCatalog::new();
        catalog.register(sample_descriptor()).unwrap();

        assert!(catalog.contains("add_todo"));
        assert!(!catalog.contains("nonexistent"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("add_todo").unwrap().summary, "Create a new todo item");
    }

    #[test]
    fn register_requires_minimal_and_full_docs() {
        let mut catalog = ToolCatalog::new();
        let descriptor =
            ToolDescriptor::new("bad", "No docs", AccessLevel::RemoteSafe)
                .doc(VerbosityLevel::Minimal, "only minimal");
        assert!(catalog.register(descriptor).is_err());
    }

    #[test]
    fn register_rejects_empty_name() {
        let mut catalog = ToolCatalog::new();
        let descriptor = ToolDescriptor::new("", "x", AccessLevel::RemoteSafe)
            .doc(VerbosityLevel::Minimal, "m")
            .doc(VerbosityLevel::Full, "f");
        assert!(catalog.register(descriptor).is_err());
    }

    #[test]
    fn input_schema_shape() {
        let schema = sample_descriptor().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["description"]["type"], "string");
        assert_eq!(
            schema["required"],
            serde_json::json!(["description", "project"])
        );
    }

    #[test]
    fn input_schema_omits_empty_required() {
        let descriptor = ToolDescriptor::new("list", "x", AccessLevel::RemoteSafe)
            .param("limit", ParamType::Integer, "Max results", false)
            .doc(VerbosityLevel::Minimal, "m")
            .doc(VerbosityLevel::Full, "f");
        let schema = descriptor.input_schema();
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn validate_args_accepts_valid() {
        let mut catalog = ToolCatalog::new();
        catalog.register(sample_descriptor()).unwrap();

        let args = serde_json::json!({"description": "write tests", "project": "toolgate"});
        let errors = catalog
            .validate_args("add_todo", args.as_object().unwrap())
            .unwrap();
        assert!(errors.is_empty(), "expected no errors, got: {:?}", errors);
    }

    #[test]
    fn validate_args_reports_missing_required() {
        let mut catalog = ToolCatalog::new();
        catalog.register(sample_descriptor()).unwrap();

        let args = serde_json::json!({});
        let errors = catalog
            .validate_args("add_todo", args.as_object().unwrap())
            .unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("Missing required parameter"));
    }

    #[test]
    fn validate_args_reports_wrong_type_and_unknown() {
        let mut catalog = ToolCatalog::new();
        catalog.register(sample_descriptor()).unwrap();

        let args = serde_json::json!({"description": 42, "project": "x", "bogus": true});
        let errors = catalog
            .validate_args("add_todo", args.as_object().unwrap())
            .unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("expected string, got number")));
        assert!(errors.iter().any(|e| e.contains("Unknown parameter: bogus")));
    }

    #[test]
    fn validate_args_unknown_tool_is_error() {
        let catalog = ToolCatalog::new();
        let args = serde_json::Map::new();
        assert!(catalog.validate_args("nonexistent", &args).is_err());
    }
}
