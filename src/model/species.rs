use super::{Assessment, TaxonOutcome};
use crate::types::CountryCode;
use serde::{Deserialize, Serialize};

/// A species as presented to the map client.
///
/// Taxonomic ranks are empty strings when unknown. The optional fields are
/// only filled by sources that know them and are omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Never empty: falls back to the scientific name.
    pub name: String,
    pub scientific_name: String,
    pub status: String,
    #[serde(default)]
    pub kingdom: String,
    #[serde(default)]
    pub phylum: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub order: String,
    #[serde(default)]
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threats: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Species {
    /// Builds a species with only identity and status known.
    pub fn new(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        let scientific_name = scientific_name.into();
        Self {
            name: display_name(name.into(), &scientific_name),
            scientific_name,
            status: status.into(),
            kingdom: String::new(),
            phylum: String::new(),
            class: String::new(),
            order: String::new(),
            family: String::new(),
            population: None,
            habitat: None,
            threats: None,
            url: None,
        }
    }

    /// Merges an assessment with the outcome of its taxonomy lookup.
    pub fn from_assessment(assessment: &Assessment, outcome: &TaxonOutcome, language: &str) -> Self {
        let common_name = outcome
            .detail()
            .and_then(|detail| detail.preferred_common_name(language))
            .unwrap_or_default();

        let mut species = Self::new(
            common_name,
            assessment.scientific_name.clone(),
            assessment.category.label(),
        );

        if let Some(detail) = outcome.detail() {
            species.kingdom = detail.kingdom.clone();
            species.phylum = detail.phylum.clone();
            species.class = detail.class.clone();
            species.order = detail.order.clone();
            species.family = detail.family.clone();
        }

        if !assessment.url.is_empty() {
            species.url = Some(assessment.url.clone());
        }

        species
    }

    pub fn with_taxonomy(
        mut self,
        kingdom: &str,
        phylum: &str,
        class: &str,
        order: &str,
        family: &str,
    ) -> Self {
        self.kingdom = kingdom.to_string();
        self.phylum = phylum.to_string();
        self.class = class.to_string();
        self.order = order.to_string();
        self.family = family.to_string();
        self
    }

    pub fn with_field_notes(mut self, population: &str, habitat: &str, threats: &str) -> Self {
        self.population = Some(population.to_string());
        self.habitat = Some(habitat.to_string());
        self.threats = Some(threats.to_string());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.url = (!url.is_empty()).then_some(url);
        self
    }
}

fn display_name(candidate: String, scientific_name: &str) -> String {
    if candidate.trim().is_empty() {
        scientific_name.to_string()
    } else {
        candidate
    }
}

/// The response body for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub country_code: CountryCode,
    /// In assessment discovery order.
    pub species: Vec<Species>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl CountryRecord {
    pub fn new(country: impl Into<String>, country_code: CountryCode, species: Vec<Species>) -> Self {
        Self {
            country: country.into(),
            country_code,
            species,
            last_updated: None,
        }
    }

    pub fn stamped(mut self, last_updated: impl Into<String>) -> Self {
        self.last_updated = Some(last_updated.into());
        self
    }
}
