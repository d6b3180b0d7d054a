use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Every JSON body the API returns has this shape
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: u16,
    pub data: T,
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            data,
            message: message.into(),
        }
    }
}

/// Successful envelope response; the HTTP status mirrors `code`
pub struct ApiJson<T>(pub ApiEnvelope<T>);

impl<T> ApiJson<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self(ApiEnvelope::ok(data, message))
    }
}

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.code).unwrap_or(StatusCode::OK);
        (status, Json(self.0)).into_response()
    }
}
