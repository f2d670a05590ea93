use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use jsonschema::error::ValidationErrorKind;
use jsonschema::ValidationError;

/// A single schema violation, shaped for returning to API clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// JSON Pointer to the offending value in the payload (`""` is the root).
    pub instance_path: String,
    /// JSON Pointer to the violated keyword inside the schema.
    pub schema_path: String,
    /// The violated keyword, e.g. `required` or `type`.
    pub keyword: String,
    /// Keyword-specific detail. For `required`, `{"missingProperty": name}`.
    pub params: Value,
    pub message: String,
}

impl ValidationIssue {
    /// Issue for a request body that could not be parsed as JSON at all.
    pub fn malformed_json(detail: impl std::fmt::Display) -> Self {
        Self {
            instance_path: String::new(),
            schema_path: String::new(),
            keyword: "json".into(),
            params: Value::Object(Map::new()),
            message: format!("request body is not valid JSON: {detail}"),
        }
    }

    /// The payload field this issue refers to, if one can be named.
    ///
    /// For a missing required property this is the property itself, otherwise
    /// the last segment of the instance path.
    pub fn field(&self) -> Option<&str> {
        if let Some(name) = self.params.get("missingProperty").and_then(Value::as_str) {
            return Some(name);
        }
        self.instance_path.rsplit('/').next().filter(|s| !s.is_empty())
    }
}

impl<'a> From<ValidationError<'a>> for ValidationIssue {
    fn from(err: ValidationError<'a>) -> Self {
        let schema_path = err.schema_path.to_string();
        let keyword = schema_path.rsplit('/').next().unwrap_or_default().to_string();
        let params = match &err.kind {
            ValidationErrorKind::Required { property } => json!({ "missingProperty": property }),
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                json!({ "additionalProperties": unexpected })
            }
            _ => Value::Object(Map::new()),
        };
        Self {
            instance_path: err.instance_path.to_string(),
            schema_path,
            keyword,
            params,
            message: err.to_string(),
        }
    }
}

/// Outcome of validating one payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationIssue>> {
        if self.valid {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
