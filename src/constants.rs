// src/constants.rs
//! Domain constants that define the operational boundaries of the service.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you how the service
//! behaves: how many species it shows, how hard it leans on the upstream
//! API, and how long it keeps what it has already computed.

// ---------------------------------------------------------------------------
// Aggregation boundaries
// ---------------------------------------------------------------------------

/// Maximum number of species returned for a single country.
///
/// Assessments beyond this count are never looked up, which keeps the
/// per-request cost of the detail fan-out bounded.
pub const MAX_SPECIES_PER_COUNTRY: usize = 20;

/// Maximum number of taxonomy lookups in flight for a single request.
///
/// The Red List API rate-limits aggressively; ten concurrent calls is the
/// ceiling it tolerates without throttling.
pub const TAXON_FETCH_CONCURRENCY: usize = 10;

/// Hard upper bound on configurable fan-out.
pub const TAXON_FETCH_CONCURRENCY_LIMIT: usize = 32;

/// Language tag of the common names shown to users.
pub const COMMON_NAME_LANGUAGE: &str = "eng";

// ---------------------------------------------------------------------------
// Upstream boundaries
// ---------------------------------------------------------------------------

/// Base endpoint of the IUCN Red List v4 API.
pub const IUCN_API_BASE_URL: &str = "https://api.iucnredlist.org/api/v4";

/// Timeout applied to every Red List API call. There are no retries.
pub const UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Base of the wiki used by the scrape source.
pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/wiki";

/// Timeout applied to scrape requests. Wiki pages are large and slow.
pub const SCRAPE_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User agent sent with scrape requests.
pub const SCRAPER_USER_AGENT: &str = "WildAtlas/1.0 (Educational Project)";

// ---------------------------------------------------------------------------
// Response cache
// ---------------------------------------------------------------------------

/// Number of country records kept in memory before the oldest is evicted.
///
/// There are fewer than 256 ISO country codes, so the bound only matters
/// when clients probe codes that do not exist.
pub const RESPONSE_CACHE_CAPACITY: usize = 256;

/// How long a cached country record is served before it is recomputed.
pub const RESPONSE_CACHE_TTL_SECS: u64 = 3600;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when logging undecodable upstream bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
