use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use plan_schema::ValidationIssue;
use plan_store::StoreError;
use plan_types::{PlanId, OBJECT_ID_FIELD};

/// Startup and lifecycle errors. Any of these stops the process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("schema error: {0}")]
    Schema(#[from] plan_schema::SchemaError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request failures, rendered as HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("payload failed validation ({} issues)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error("resource with objectId {0} already exists")]
    Conflict(PlanId),

    #[error("resource not found: {0}")]
    NotFound(PlanId),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Conflict(id) => Self::Conflict(id),
            StoreError::Invalid(e) => Self::Invalid(vec![ValidationIssue {
                instance_path: format!("/{OBJECT_ID_FIELD}"),
                schema_path: String::new(),
                keyword: OBJECT_ID_FIELD.into(),
                params: json!({}),
                message: e.to_string(),
            }]),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Invalid(errors) => json!({ "errors": errors }),
            Self::Conflict(_) => json!({ "error": "Resource with this objectId already exists" }),
            Self::NotFound(_) => json!({ "error": "Resource not found" }),
        };
        (status, Json(body)).into_response()
    }
}
