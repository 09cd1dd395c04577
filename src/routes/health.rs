// ABOUTME: Health check route for service monitoring and load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::{routing::get, Json, Router};

/// Liveness endpoint
pub fn routes() -> Router {
    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    Router::new().route("/health", get(health_handler))
}
