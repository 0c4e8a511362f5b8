// src/api/parallel_fetcher.rs
//! Bounded parallel taxonomy lookups for a batch of assessments.
//!
//! Every assessment gets a result slot before any work starts, and each
//! task writes back into its own slot by index. Output order is therefore
//! input order, whichever lookup finishes first.

use super::RedListRepository;
use crate::constants::{COMMON_NAME_LANGUAGE, TAXON_FETCH_CONCURRENCY, TAXON_FETCH_CONCURRENCY_LIMIT};
use crate::model::{Assessment, Species, TaxonOutcome};
use crate::types::ScientificName;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Resolves taxonomy for many species with a fixed ceiling on in-flight calls.
pub struct TaxonFetcher {
    repository: Arc<dyn RedListRepository>,
    max_in_flight: usize,
    language: String,
}

impl TaxonFetcher {
    /// Creates a fetcher allowing `max_in_flight` concurrent lookups.
    ///
    /// The ceiling is clamped to `1..=TAXON_FETCH_CONCURRENCY_LIMIT`.
    pub fn new(repository: Arc<dyn RedListRepository>, max_in_flight: usize) -> Self {
        Self {
            repository,
            max_in_flight: max_in_flight.clamp(1, TAXON_FETCH_CONCURRENCY_LIMIT),
            language: COMMON_NAME_LANGUAGE.to_string(),
        }
    }

    /// Creates a fetcher with the default ceiling.
    pub fn with_default_concurrency(repository: Arc<dyn RedListRepository>) -> Self {
        Self::new(repository, TAXON_FETCH_CONCURRENCY)
    }

    /// Selects common names in `language` instead of English.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Builds one species per assessment, in input order.
    ///
    /// Returns only once every lookup has finished. A failed lookup degrades
    /// that species to its assessment fields; it never fails the batch.
    ///
    /// Lookups are owned by the returned future. Dropping it, as axum does
    /// when a client disconnects, aborts the lookups still in flight.
    pub async fn fetch_species(&self, assessments: &[Assessment]) -> Vec<Species> {
        let mut slots: Vec<Species> = assessments
            .iter()
            .map(|assessment| {
                Species::from_assessment(
                    assessment,
                    &TaxonOutcome::unresolved("lookup did not complete"),
                    &self.language,
                )
            })
            .collect();

        let permits = Arc::new(Semaphore::new(self.max_in_flight));
        let mut join_set = JoinSet::new();

        for (index, assessment) in assessments.iter().enumerate() {
            let permits = Arc::clone(&permits);
            let repository = Arc::clone(&self.repository);
            let scientific_name = assessment.scientific_name.clone();

            join_set.spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return (index, TaxonOutcome::unresolved("fetch pool closed")),
                };
                let outcome = resolve_taxon(repository.as_ref(), &scientific_name).await;
                (index, outcome)
            });
        }

        let mut resolved = 0;
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    if matches!(outcome, TaxonOutcome::Resolved(_)) {
                        resolved += 1;
                    }
                    if let (Some(slot), Some(assessment)) =
                        (slots.get_mut(index), assessments.get(index))
                    {
                        *slot = Species::from_assessment(assessment, &outcome, &self.language);
                    }
                }
                Err(e) => {
                    log::error!("Taxonomy lookup task failed: {}", e);
                }
            }
        }

        log::debug!(
            "Resolved taxonomy for {}/{} species",
            resolved,
            assessments.len()
        );

        slots
    }
}

/// Looks up one species, folding every failure into `Unresolved`.
async fn resolve_taxon(repository: &dyn RedListRepository, raw_name: &str) -> TaxonOutcome {
    let name = match ScientificName::parse(raw_name) {
        Ok(name) => name,
        Err(e) => {
            log::warn!("Skipping taxonomy lookup: {}", e);
            return TaxonOutcome::unresolved(e.to_string());
        }
    };

    match repository.taxon_detail(&name).await {
        Ok(detail) => TaxonOutcome::Resolved(detail),
        Err(e) => {
            log::warn!("Taxonomy lookup failed for {}: {}", name, e);
            TaxonOutcome::unresolved(e.to_string())
        }
    }
}
