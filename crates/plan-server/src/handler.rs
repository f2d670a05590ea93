use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use plan_schema::ValidationIssue;
use plan_types::PlanId;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `POST /plan`: validate and store a new plan.
///
/// Responds 201 with `{"data", "etag"}` and an `ETag` header, 400 with the
/// schema issues, or 409 if the `objectId` is taken.
pub async fn create_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Invalid(vec![ValidationIssue::malformed_json(e)]))?;

    if let Err(issues) = state.validator.check(&payload) {
        tracing::warn!(issues = issues.len(), "rejected plan: schema validation failed");
        return Err(ApiError::Invalid(issues));
    }

    let resource = state.store.create(payload).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected plan");
    })?;
    let etag = resource.version_tag.to_string();
    Ok((StatusCode::CREATED, [(header::ETAG, etag)], Json(resource)).into_response())
}

/// `GET /plan/:id`: fetch a plan, honouring `If-None-Match`.
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let resource = state.store.get(&PlanId::new(id))?;
    let etag = resource.version_tag.to_string();

    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| resource.version_tag.matches_if_none_match(v));
    if not_modified {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok(([(header::ETAG, etag)], Json(resource.data)).into_response())
}

/// `DELETE /plan/:id`: remove a plan. A second delete is a 404.
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&PlanId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /plans`: every stored payload, always 200.
pub async fn list_plans(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.store.list_all())
}
