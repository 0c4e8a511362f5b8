//! In-memory Red List for tests.
//!
//! Pre-load countries and taxa, optionally delay individual lookups, and
//! read back how many taxonomy calls were in flight at once.

use super::{CountryAssessments, RedListRepository};
use crate::error::AppError;
use crate::model::{Assessment, CommonName, RedListCategory, TaxonDetail};
use crate::types::{CountryCode, ScientificName};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct MockRedList {
    countries: HashMap<String, CountryAssessments>,
    country_list: Option<HashMap<String, String>>,
    country_list_delay: Duration,
    taxa: HashMap<String, TaxonDetail>,
    taxon_delays: HashMap<String, Duration>,
    default_taxon_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    taxon_calls: AtomicUsize,
    country_calls: AtomicUsize,
}

impl MockRedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(
        mut self,
        code: &str,
        name: &str,
        assessments: Vec<Assessment>,
    ) -> Self {
        self.countries.insert(
            code.to_string(),
            CountryAssessments {
                country_name: name.to_string(),
                assessments,
            },
        );
        self
    }

    pub fn with_country_list(mut self, names: &[(&str, &str)], delay: Duration) -> Self {
        self.country_list = Some(
            names
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        );
        self.country_list_delay = delay;
        self
    }

    pub fn with_taxon(mut self, detail: TaxonDetail) -> Self {
        self.taxa.insert(detail.scientific_name.clone(), detail);
        self
    }

    pub fn with_taxon_delay(mut self, scientific_name: &str, delay: Duration) -> Self {
        self.taxon_delays.insert(scientific_name.to_string(), delay);
        self
    }

    pub fn with_default_taxon_delay(mut self, delay: Duration) -> Self {
        self.default_taxon_delay = delay;
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn taxon_calls(&self) -> usize {
        self.taxon_calls.load(Ordering::SeqCst)
    }

    pub fn country_calls(&self) -> usize {
        self.country_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RedListRepository for MockRedList {
    async fn list_countries(&self) -> Result<HashMap<String, String>, AppError> {
        tokio::time::sleep(self.country_list_delay).await;
        self.country_list.clone().ok_or(AppError::UpstreamStatus {
            endpoint: "countries".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        })
    }

    async fn country_assessments(
        &self,
        code: &CountryCode,
    ) -> Result<CountryAssessments, AppError> {
        self.country_calls.fetch_add(1, Ordering::SeqCst);
        self.countries
            .get(code.as_str())
            .cloned()
            .ok_or_else(|| AppError::UpstreamStatus {
                endpoint: format!("countries/{}", code),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn taxon_detail(&self, name: &ScientificName) -> Result<TaxonDetail, AppError> {
        self.taxon_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let key = format!("{} {}", name.genus(), name.species());
        let delay = self
            .taxon_delays
            .get(&key)
            .copied()
            .unwrap_or(self.default_taxon_delay);
        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.taxa
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::UpstreamStatus {
                endpoint: "taxa/scientific_name".to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}

pub fn assessment(name: &str, code: &str) -> Assessment {
    Assessment::new(
        name,
        RedListCategory::from_code(code),
        format!("https://www.iucnredlist.org/search?q={}", name.replace(' ', "+")),
    )
}

pub fn taxon(name: &str, common: &str, family: &str) -> TaxonDetail {
    TaxonDetail {
        scientific_name: name.to_string(),
        kingdom: "ANIMALIA".to_string(),
        phylum: "CHORDATA".to_string(),
        class: "MAMMALIA".to_string(),
        order: "CARNIVORA".to_string(),
        family: family.to_string(),
        common_names: vec![CommonName::new(common, "eng", true)],
    }
}
