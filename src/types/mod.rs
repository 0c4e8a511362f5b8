use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid country code: '{input}' (expected exactly 2 characters)")]
    InvalidCountryCode { input: String },

    #[error("Invalid scientific name: '{input}' (expected at least genus and species)")]
    InvalidScientificName { input: String },

    #[error("Invalid API token format: {reason}")]
    InvalidApiToken { reason: String },
}
