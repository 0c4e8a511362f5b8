// src/api/mod.rs
//! Red List API interaction: assessments, taxonomy and country names.
//!
//! I/O (`client`), wire payloads (`responses`) and status/decode handling
//! (`parser`) are kept apart so that the aggregation logic only ever sees
//! domain types through [`RedListRepository`].

pub mod client;
pub mod country_index;
pub mod parallel_fetcher;
pub mod parser;
pub mod responses;
mod types;

#[cfg(test)]
pub(crate) mod testing;

use crate::error::AppError;
use crate::model::TaxonDetail;
use crate::types::{CountryCode, ScientificName};
use std::collections::HashMap;

pub use client::RedListHttpClient;
pub use country_index::CountryNameIndex;
pub use parallel_fetcher::TaxonFetcher;
pub use types::CountryAssessments;

/// The ability to retrieve conservation data from the Red List.
///
/// Every call is a single attempt. Implementations never retry; callers
/// decide what a failure means for them.
#[async_trait::async_trait]
pub trait RedListRepository: Send + Sync {
    /// Every known country, code → English name.
    async fn list_countries(&self) -> Result<HashMap<String, String>, AppError>;

    /// The country's name and its assessments in upstream order.
    async fn country_assessments(&self, code: &CountryCode)
        -> Result<CountryAssessments, AppError>;

    /// Taxonomy and common names for one species.
    async fn taxon_detail(&self, name: &ScientificName) -> Result<TaxonDetail, AppError>;
}
