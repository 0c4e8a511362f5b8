// src/server/handlers.rs
//! Request handlers and the JSON error body.

use super::AppState;
use crate::error::AppError;
use crate::model::CountryRecord;
use crate::types::{CountryCode, ValidationError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message returned for every server-side failure. Details stay in the log.
const INTERNAL_FAILURE_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// An [`AppError`] on its way to the client.
#[derive(Debug)]
pub struct ApiFailure(pub AppError);

impl From<AppError> for ApiFailure {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<ValidationError> for ApiFailure {
    fn from(error: ValidationError) -> Self {
        Self(error.into())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            log::debug!("Rejected request: {}", self.0);
            let body = ErrorBody::new(self.0.kind(), self.0.to_string());
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        log::error!("Request failed ({}): {}", self.0.kind(), self.0);
        let body = ErrorBody::new("internal_error", INTERNAL_FAILURE_MESSAGE);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "healthy" })
}

pub async fn species(
    State(state): State<AppState>,
    Path(raw_code): Path<String>,
) -> Result<Json<CountryRecord>, ApiFailure> {
    log::info!("Species request for '{}'", raw_code);
    let code = CountryCode::parse(&raw_code)?;
    let record = state.source.country_data(&code).await?;
    log::debug!("{}: {} species", code, record.species.len());
    Ok(Json(record))
}

/// `/api/species` with no code at all.
pub async fn missing_code() -> ApiFailure {
    ValidationError::InvalidCountryCode {
        input: String::new(),
    }
    .into()
}

/// CORS preflight: 200 with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> Response {
    let body = ErrorBody::new("method_not_allowed", "Method not allowed");
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}

pub async fn not_found() -> Response {
    let body = ErrorBody::new("not_found", "No such endpoint");
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
