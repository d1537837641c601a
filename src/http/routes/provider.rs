use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::global::Global;
use crate::http::error::{ApiError, ApiErrorCode};

pub const VALIDATE_PATH: &str = "/provider/validate";

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route(VALIDATE_PATH, post(validate))
}

#[derive(Debug, serde::Deserialize)]
struct ValidateRequest {
    #[serde(default)]
    credentials: Value,
}

#[derive(serde::Serialize)]
struct ValidateResponse {
    valid: bool,
}

/// POST /provider/validate
///
/// Called once when the plugin is configured. A rejection carries the
/// message the host shows to the operator.
#[tracing::instrument(skip_all)]
async fn validate(
    State(global): State<Arc<Global>>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    global
        .provider
        .validate(&request.credentials)
        .await
        .map_err(|e| ApiError::unprocessable(ApiErrorCode::INVALID_CREDENTIALS, e.to_string()))?;

    Ok(Json(ValidateResponse { valid: true }))
}
