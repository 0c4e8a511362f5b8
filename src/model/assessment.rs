use serde::{Deserialize, Serialize};
use std::fmt;

/// Red List conservation category, keyed by its two-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RedListCategory {
    CriticallyEndangered,
    Endangered,
    Vulnerable,
    NearThreatened,
    /// Any code without a dedicated label (LC, DD, EX, ...).
    Other(String),
}

impl RedListCategory {
    pub fn from_code(code: &str) -> Self {
        match code {
            "CR" => Self::CriticallyEndangered,
            "EN" => Self::Endangered,
            "VU" => Self::Vulnerable,
            "NT" => Self::NearThreatened,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::CriticallyEndangered => "CR",
            Self::Endangered => "EN",
            Self::Vulnerable => "VU",
            Self::NearThreatened => "NT",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label. Unknown codes label themselves.
    pub fn label(&self) -> &str {
        match self {
            Self::CriticallyEndangered => "Critically Endangered",
            Self::Endangered => "Endangered",
            Self::Vulnerable => "Vulnerable",
            Self::NearThreatened => "Near Threatened",
            Self::Other(code) => code,
        }
    }

    /// Whether species in this category are shown to users.
    ///
    /// Near Threatened has a label but is not aggregated.
    pub fn is_threatened(&self) -> bool {
        matches!(
            self,
            Self::CriticallyEndangered | Self::Endangered | Self::Vulnerable
        )
    }
}

impl fmt::Display for RedListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<String> for RedListCategory {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<RedListCategory> for String {
    fn from(category: RedListCategory) -> Self {
        category.code().to_string()
    }
}

/// One upstream assertion of a species' category within a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub scientific_name: String,
    pub category: RedListCategory,
    /// Link to the assessment page; empty when upstream omitted it.
    pub url: String,
}

impl Assessment {
    pub fn new(
        scientific_name: impl Into<String>,
        category: RedListCategory,
        url: impl Into<String>,
    ) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            category,
            url: url.into(),
        }
    }
}
