use std::fmt::Display;

use serde::de::Error;

/// Error body returned by the Chapa API. `data` is always null on failures;
/// `message` is a plain string or, for validation failures, an object keyed
/// by field name.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub message: serde_json::Value,
    pub status: String,
}

#[derive(Debug)]
pub enum GatewayError {
    Transport(reqwest::Error),
    Rejected(ErrorResponse),
    Decode(serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Decode(serde_json::Error::custom(
                "failed to decode response body",
            ));
        }
        Self::Transport(value)
    }
}

impl From<ErrorResponse> for GatewayError {
    fn from(value: ErrorResponse) -> Self {
        Self::Rejected(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl std::error::Error for GatewayError {}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(e) => write!(f, "http request error: {e}"),
            GatewayError::Rejected(error_response) => {
                write!(f, "gateway response: {}", error_response.message)
            }
            GatewayError::Decode(e) => {
                write!(f, "gateway response deserialization: {e}")
            }
        }
    }
}
