use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Kubernetes probe endpoint; returns a simple status object.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "recommend-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
