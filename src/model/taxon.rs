use serde::{Deserialize, Serialize};

/// A localized vernacular name for a taxon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonName {
    pub name: String,
    pub language: String,
    /// Upstream marks one name per language as the main one.
    pub main: bool,
}

impl CommonName {
    pub fn new(name: impl Into<String>, language: impl Into<String>, main: bool) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            main,
        }
    }
}

/// Taxonomic classification plus common names for one species.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonDetail {
    pub scientific_name: String,
    pub kingdom: String,
    pub phylum: String,
    pub class: String,
    pub order: String,
    pub family: String,
    pub common_names: Vec<CommonName>,
}

impl TaxonDetail {
    /// Picks the name shown to users for `language`.
    ///
    /// The first main name in the language wins; otherwise the first name in
    /// the language. Blank names are never selected.
    pub fn preferred_common_name(&self, language: &str) -> Option<&str> {
        let mut candidates = self
            .common_names
            .iter()
            .filter(|cn| cn.language == language && !cn.name.trim().is_empty());

        let first = candidates.next()?;
        if first.main {
            return Some(first.name.trim());
        }
        let chosen = candidates.find(|cn| cn.main).unwrap_or(first);
        Some(chosen.name.trim())
    }
}

/// Result of looking up a single species' taxonomy.
///
/// A failed lookup is not an error for the batch: the species is still
/// reported, built from its assessment alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonOutcome {
    Resolved(TaxonDetail),
    Unresolved { reason: String },
}

impl TaxonOutcome {
    pub fn unresolved(reason: impl Into<String>) -> Self {
        Self::Unresolved {
            reason: reason.into(),
        }
    }

    pub fn detail(&self) -> Option<&TaxonDetail> {
        match self {
            Self::Resolved(detail) => Some(detail),
            Self::Unresolved { .. } => None,
        }
    }
}
