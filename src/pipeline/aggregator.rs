// src/pipeline/aggregator.rs
//! Live aggregation against the Red List.
//!
//! One request runs: assessments → threatened filter → cap → bounded
//! taxonomy fan-out → merge. Nothing is retried and nothing is memoized here.

use super::SpeciesSource;
use crate::api::{CountryAssessments, CountryNameIndex, RedListRepository, TaxonFetcher};
use crate::constants::{COMMON_NAME_LANGUAGE, MAX_SPECIES_PER_COUNTRY, TAXON_FETCH_CONCURRENCY};
use crate::error::AppError;
use crate::model::{Assessment, CountryRecord};
use crate::types::CountryCode;
use std::sync::Arc;

/// Limits applied to a single aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSettings {
    /// Threatened assessments kept per country.
    pub max_species: usize,
    /// Taxonomy lookups in flight at once.
    pub concurrency: usize,
    /// Language tag used to pick common names.
    pub language: String,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            max_species: MAX_SPECIES_PER_COUNTRY,
            concurrency: TAXON_FETCH_CONCURRENCY,
            language: COMMON_NAME_LANGUAGE.to_string(),
        }
    }
}

pub struct SpeciesAggregator {
    repository: Arc<dyn RedListRepository>,
    fetcher: TaxonFetcher,
    names: Arc<CountryNameIndex>,
    max_species: usize,
}

impl SpeciesAggregator {
    /// Builds an aggregator around an existing name index.
    pub fn new(
        repository: Arc<dyn RedListRepository>,
        names: Arc<CountryNameIndex>,
        settings: &AggregationSettings,
    ) -> Self {
        let fetcher = TaxonFetcher::new(Arc::clone(&repository), settings.concurrency)
            .with_language(settings.language.clone());
        Self {
            repository,
            fetcher,
            names,
            max_species: settings.max_species,
        }
    }

    /// Builds an aggregator with a fresh name index and starts filling it.
    ///
    /// Must be called inside a Tokio runtime. The population task is detached.
    pub fn connect(repository: Arc<dyn RedListRepository>, settings: &AggregationSettings) -> Self {
        let names = Arc::new(CountryNameIndex::new());
        names.spawn_population(Arc::clone(&repository));
        Self::new(repository, names, settings)
    }

    pub fn country_names(&self) -> &Arc<CountryNameIndex> {
        &self.names
    }

    /// Validates `raw_code` and aggregates the record for it.
    pub async fn get_country_data(&self, raw_code: &str) -> Result<CountryRecord, AppError> {
        let code = CountryCode::parse(raw_code)?;
        self.aggregate(&code).await
    }

    async fn aggregate(&self, code: &CountryCode) -> Result<CountryRecord, AppError> {
        let CountryAssessments {
            country_name,
            assessments,
        } = self.repository.country_assessments(code).await?;

        let total = assessments.len();
        let selected = select_threatened(assessments, self.max_species);
        log::debug!(
            "{}: {} assessments, {} selected for taxonomy lookup",
            code,
            total,
            selected.len()
        );

        let species = self.fetcher.fetch_species(&selected).await;

        let country = if country_name.trim().is_empty() {
            self.names.lookup(code.as_str())
        } else {
            country_name
        };

        Ok(CountryRecord::new(country, code.clone(), species))
    }
}

#[async_trait::async_trait]
impl SpeciesSource for SpeciesAggregator {
    async fn country_data(&self, code: &CountryCode) -> Result<CountryRecord, AppError> {
        self.aggregate(code).await
    }
}

/// Keeps the first `limit` CR/EN/VU assessments in discovery order.
pub fn select_threatened(assessments: Vec<Assessment>, limit: usize) -> Vec<Assessment> {
    assessments
        .into_iter()
        .filter(|assessment| assessment.category.is_threatened())
        .take(limit)
        .collect()
}
