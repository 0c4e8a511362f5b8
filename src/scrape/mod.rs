// src/scrape/mod.rs
//! Scrape-based species source.
//!
//! Reads Wikipedia's per-country endangered species lists and falls back to
//! bundled sample data whenever a page is missing, unreachable or empty.
//! This source never fails; pair it with a response cache.

pub mod country_names;
pub mod sample_data;
pub mod wikipedia;

use crate::constants::{
    MAX_SPECIES_PER_COUNTRY, SCRAPER_USER_AGENT, SCRAPE_REQUEST_TIMEOUT_SECS, WIKIPEDIA_BASE_URL,
};
use crate::error::AppError;
use crate::model::{CountryRecord, Species};
use crate::pipeline::SpeciesSource;
use crate::types::CountryCode;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub use country_names::country_name;

pub struct ScrapingSource {
    client: Client,
    base_url: String,
    max_species: usize,
}

impl ScrapingSource {
    /// Creates a source reading the public English Wikipedia.
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(
            WIKIPEDIA_BASE_URL,
            Duration::from_secs(SCRAPE_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Creates a source reading wiki pages under `base_url`.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        Url::parse(base_url).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid wiki URL '{}': {}", base_url, e))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(SCRAPER_USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            max_species: MAX_SPECIES_PER_COUNTRY,
        })
    }

    pub fn with_max_species(mut self, max_species: usize) -> Self {
        self.max_species = max_species;
        self
    }

    async fn scrape(&self, country_name: &str) -> Result<Vec<Species>, AppError> {
        let url = wikipedia::page_url(&self.base_url, country_name);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| AppError::UpstreamUnavailable {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                endpoint: url,
                status,
            });
        }

        let html = response
            .text()
            .await
            .map_err(|source| AppError::UpstreamUnavailable {
                endpoint: url.clone(),
                source,
            })?;

        Ok(wikipedia::parse_species_table(&html, self.max_species))
    }
}

#[async_trait::async_trait]
impl SpeciesSource for ScrapingSource {
    async fn country_data(&self, code: &CountryCode) -> Result<CountryRecord, AppError> {
        let name = country_name(code.as_str());

        let species = match self.scrape(&name).await {
            Ok(species) if !species.is_empty() => species,
            Ok(_) => {
                log::warn!("No species rows for {}; using sample data", name);
                sample_data::sample_species(code.as_str())
            }
            Err(e) => {
                log::warn!("Scrape failed for {}: {}; using sample data", name, e);
                sample_data::sample_species(code.as_str())
            }
        };

        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Ok(CountryRecord::new(name, code.clone(), species).stamped(stamp))
    }
}
