// src/api/parser.rs
//! Turns raw upstream responses into typed payloads.
//!
//! Status is checked before the body is looked at: a non-2xx response is an
//! `UpstreamStatus` failure whatever its body says.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Parse an upstream response into `T`.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if !result.status.is_success() {
        return Err(AppError::UpstreamStatus {
            endpoint: result.endpoint,
            status: result.status,
        });
    }

    serde_json::from_str(&result.data).map_err(|source| {
        log::error!(
            "Failed to decode response from {}: {} (body: {})",
            result.endpoint,
            source,
            preview(&result.data)
        );
        AppError::DecodeError {
            endpoint: result.endpoint,
            source,
        }
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}
