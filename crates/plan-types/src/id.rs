use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;

/// Name of the payload field that carries a plan's identifier.
pub const OBJECT_ID_FIELD: &str = "objectId";

/// Client-supplied identifier of a stored plan.
///
/// A `PlanId` is taken verbatim from the `objectId` field of the submitted
/// payload. It is the sole key of the store: at most one resource exists per
/// id at any time.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    /// Wrap an identifier string as-is.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extract the identifier from a JSON payload's `objectId` field.
    pub fn from_payload(payload: &Value) -> Result<Self, TypeError> {
        let object = payload.as_object().ok_or(TypeError::NotAnObject)?;
        match object.get(OBJECT_ID_FIELD) {
            None => Err(TypeError::MissingObjectId),
            Some(Value::String(s)) if s.is_empty() => Err(TypeError::EmptyObjectId),
            Some(Value::String(s)) => Ok(Self(s.clone())),
            Some(other) => Err(TypeError::ObjectIdNotString(json_type_name(other).into())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Debug for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlanId({})", self.0)
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlanId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PlanId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for PlanId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
