use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use std::sync::Arc;

use crate::domain::shared::{ApiEnvelope, ApiJson};
use crate::infrastructure::db::{check_connection, DbPool};

pub async fn health() -> impl IntoResponse {
    ApiJson::ok(json!({ "status": "ok" }), "OK")
}

pub async fn health_ready(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    match check_connection(&pool).await {
        Ok(_) => ApiJson::ok(
            json!({
                "status": "ready",
                "database": "connected"
            }),
            "Service ready",
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            ApiJson(ApiEnvelope {
                code: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                data: json!({
                    "status": "not_ready",
                    "database": "disconnected"
                }),
                message: "Database unavailable".to_string(),
            })
        }
    }
}
