// src/lib.rs
//! wildatlas library: per-country endangered species data for a map client.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ServiceConfig`
//! - **Domain model**: `Assessment`, `TaxonDetail`, `Species`, `CountryRecord`
//! - **Domain types**: `CountryCode`, `ScientificName`, `ApiToken`
//! - **API client**: `RedListRepository`, `RedListHttpClient`, `TaxonFetcher`
//! - **Pipeline**: `SpeciesSource` and its implementations
//! - **Server**: `router`, `serve`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod scrape;
pub mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CacheSettings, CommandLineInput, ServiceConfig, SourceKind};

// --- Domain Model ---
pub use crate::model::{
    Assessment, CommonName, CountryRecord, RedListCategory, Species, TaxonDetail, TaxonOutcome,
};

// --- Domain Types ---
pub use crate::types::{ApiToken, CountryCode, ScientificName};

// --- API Client ---
pub use crate::api::{
    CountryAssessments, CountryNameIndex, RedListHttpClient, RedListRepository, TaxonFetcher,
};

// --- Pipeline ---
pub use crate::pipeline::{
    AggregationSettings, CachedSpeciesSource, CuratedFallback, CuratedPolicy, ResponseCache,
    SpeciesAggregator, SpeciesSource,
};
pub use crate::scrape::ScrapingSource;

// --- Server ---
pub use crate::server::{router, router_with_static, serve, AppState};
