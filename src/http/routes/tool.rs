use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::global::Global;
use crate::tool::{available_sources, HotDataMessage, SourceInfo};

pub const INVOKE_PATH: &str = "/tools/daily-hot/invoke";
pub const SOURCES_PATH: &str = "/tools/daily-hot/sources";

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route(INVOKE_PATH, post(invoke))
        .route(SOURCES_PATH, get(sources))
}

#[derive(Debug, serde::Deserialize)]
struct InvokeRequest {
    #[serde(default)]
    credentials: Value,
    #[serde(default)]
    tool_parameters: Value,
}

/// POST /tools/daily-hot/invoke
///
/// Always answers 200; failures are reported inside the message.
#[tracing::instrument(skip_all)]
async fn invoke(State(global): State<Arc<Global>>, Json(request): Json<InvokeRequest>) -> Json<HotDataMessage> {
    Json(
        global
            .tool
            .invoke(&request.tool_parameters, &request.credentials)
            .await,
    )
}

/// GET /tools/daily-hot/sources
async fn sources() -> Json<Vec<SourceInfo>> {
    Json(available_sources())
}
