use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Liveness probe. Answers an empty array.
pub async fn health() -> Json<Value> {
    Json(json!([]))
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}
