// src/pipeline/mod.rs
//! Species pipeline capability traits and their implementations.
//!
//! Every way of producing a country record (live aggregation, scraping,
//! memoization, curated data) is a [`SpeciesSource`], so decorators stack
//! without the HTTP layer knowing which one it talks to.

pub mod aggregator;
pub mod cache;
pub mod curated;

use crate::error::AppError;
use crate::model::CountryRecord;
use crate::types::CountryCode;

pub use aggregator::{AggregationSettings, SpeciesAggregator};
pub use cache::{CachedSpeciesSource, ResponseCache};
pub use curated::{CuratedFallback, CuratedPolicy};

/// Produces the endangered-species record for a country.
#[async_trait::async_trait]
pub trait SpeciesSource: Send + Sync {
    async fn country_data(&self, code: &CountryCode) -> Result<CountryRecord, AppError>;
}
