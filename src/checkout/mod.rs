use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub mod api;

pub type Result<T> = std::result::Result<T, InitiateErrorResponse>;

/// Generic failure body for checkout initiation.
///
/// Gateway rejections and transport errors are indistinguishable to the
/// client; the distinction stays in the server logs.
#[derive(Debug, Default, Serialize)]
pub struct InitiateErrorResponse {
    error: &'static str,
}

impl InitiateErrorResponse {
    pub fn new() -> Self {
        Self {
            error: "Failed to initiate payment",
        }
    }
}

impl IntoResponse for InitiateErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
