// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer token for the Red List API.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new API token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        let token = token.trim();

        if token.is_empty() {
            return Err(ValidationError::InvalidApiToken {
                reason: "API token cannot be empty".to_string(),
            });
        }

        if token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidApiToken {
                reason: "API token cannot contain whitespace".to_string(),
            });
        }

        Ok(Self(token.to_string()))
    }

    /// Get the token as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact token in display
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "{}...", prefix)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiToken({})", self)
    }
}

/// ISO 3166-1 alpha-2 country code, always uppercase.
///
/// Validation is deliberately shallow: any two characters are accepted so
/// that unknown codes reach the upstream API and fail there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse user input into a code. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.chars().count() != 2 {
            return Err(ValidationError::InvalidCountryCode {
                input: input.to_string(),
            });
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// A binomial (or longer) scientific name split into its lookup parts.
///
/// The taxonomy endpoint is keyed by genus and species epithet; any
/// infraspecific tokens are kept in the full name but not sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScientificName {
    full: String,
    genus: String,
    species: String,
}

impl ScientificName {
    /// Split a name on whitespace, requiring at least genus and species.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut tokens = input.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(genus), Some(species)) => Ok(Self {
                full: input.trim().to_string(),
                genus: genus.to_string(),
                species: species.to_string(),
            }),
            _ => Err(ValidationError::InvalidScientificName {
                input: input.to_string(),
            }),
        }
    }

    pub fn genus(&self) -> &str {
        &self.genus
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for ScientificName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}
