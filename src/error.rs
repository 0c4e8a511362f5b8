// src/error.rs
//! Application error types with structured error handling.
//!
//! Error variants name what went wrong and where. Only two outcomes matter
//! to clients: the request was malformed (`400`) or something upstream or
//! internal failed (`500`). Upstream detail stays in the logs.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Upstream unavailable at {endpoint}: {source}")]
    UpstreamUnavailable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned HTTP {status} for {endpoint}")]
    UpstreamStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("Could not decode upstream payload from {endpoint}: {source}")]
    DecodeError {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the failure originated at the upstream data source.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamUnavailable { .. } | Self::UpstreamStatus { .. } | Self::DecodeError { .. }
        )
    }

    /// Stable machine-readable label for logs and error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid_input",
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::DecodeError { .. } => "decode_error",
            Self::MissingConfiguration(_) => "missing_configuration",
            Self::Internal { .. } => "internal_error",
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
