use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;

pub mod provider;
pub mod tool;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/", get(root))
        .merge(provider::routes())
        .merge(tool::routes())
}

#[derive(serde::Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: &'static [&'static str],
}

#[tracing::instrument(skip(global))]
async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "DailyHot Plugin",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints: &[
            provider::VALIDATE_PATH,
            tool::INVOKE_PATH,
            tool::SOURCES_PATH,
        ],
    })
}
