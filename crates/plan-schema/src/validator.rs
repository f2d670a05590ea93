use std::path::Path;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use plan_types::OBJECT_ID_FIELD;

use crate::error::{SchemaError, SchemaResult};
use crate::issue::{ValidationIssue, ValidationReport};

/// The plan schema shipped with the crate.
pub const BUILTIN_PLAN_SCHEMA: &str = include_str!("../schemas/plan.schema.json");

/// A compiled plan schema.
///
/// Construct once at startup and share (e.g. behind an `Arc`); validation
/// takes `&self` and has no side effects.
pub struct SchemaValidator {
    compiled: JSONSchema,
    source: Value,
}

impl SchemaValidator {
    /// Compile the built-in plan schema.
    pub fn builtin() -> SchemaResult<Self> {
        let schema: Value = serde_json::from_str(BUILTIN_PLAN_SCHEMA)?;
        Self::from_value(schema)
    }

    /// Read and compile a schema from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded plan schema");
        Self::from_value(schema)
    }

    /// Compile a schema document.
    ///
    /// The schema must list `objectId` under `required` and declare it as a
    /// string, since the store keys every resource by that field.
    pub fn from_value(schema: Value) -> SchemaResult<Self> {
        if !requires_string_object_id(&schema) {
            return Err(SchemaError::MissingObjectId);
        }
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema)
            .map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self {
            compiled,
            source: schema,
        })
    }

    /// Validate a payload, collecting every violation.
    pub fn validate(&self, payload: &Value) -> ValidationReport {
        match self.compiled.validate(payload) {
            Ok(()) => ValidationReport::ok(),
            Err(errors) => ValidationReport::invalid(errors.map(ValidationIssue::from).collect()),
        }
    }

    /// Validate a payload, returning the violations as the error value.
    pub fn check(&self, payload: &Value) -> Result<(), Vec<ValidationIssue>> {
        self.validate(payload).into_result()
    }

    /// The schema document this validator was compiled from.
    pub fn schema(&self) -> &Value {
        &self.source
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("title", &self.source.get("title"))
            .finish()
    }
}

fn requires_string_object_id(schema: &Value) -> bool {
    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|req| req.iter().any(|v| v.as_str() == Some(OBJECT_ID_FIELD)));
    let typed_string = match schema.pointer(&format!("/properties/{OBJECT_ID_FIELD}/type")) {
        Some(Value::String(t)) => t == "string",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("string")),
        _ => false,
    };
    required && typed_string
}
