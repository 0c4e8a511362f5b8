// src/pipeline/cache.rs
//! In-memory response cache for country records.
//!
//! Bounded by an LRU capacity and an optional TTL. Records are cached whole,
//! `last_updated` included, so a hit is byte-identical to the original answer.

use super::SpeciesSource;
use crate::constants::{RESPONSE_CACHE_CAPACITY, RESPONSE_CACHE_TTL_SECS};
use crate::error::AppError;
use crate::model::CountryRecord;
use crate::types::CountryCode;
use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Cache store
// ---------------------------------------------------------------------------

struct CacheEntry {
    record: Arc<CountryRecord>,
    cached_at: Instant,
}

/// Process-wide country record cache.
///
/// Lookups take the shared lock and do not touch recency, so concurrent reads
/// never serialize. Eviction order is therefore insertion order.
pub struct ResponseCache {
    entries: RwLock<LruCache<CountryCode, CacheEntry>>,
    ttl: Option<Duration>,
}

impl ResponseCache {
    /// `ttl` of zero disables expiry. A zero `capacity` is raised to one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            ttl: (!ttl.is_zero()).then_some(ttl),
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.entries.read().cap().get()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cached record for `code`, if present and not expired.
    pub fn get(&self, code: &CountryCode) -> Option<Arc<CountryRecord>> {
        let entries = self.entries.read();
        entries
            .peek(code)
            .filter(|entry| self.is_fresh(entry))
            .map(|entry| Arc::clone(&entry.record))
    }

    /// Stores `record` unless a fresh one for the same code is already there.
    ///
    /// Returns whichever record is cached afterwards, so concurrent misses for
    /// one code all answer with the same record.
    pub fn insert(&self, code: CountryCode, record: CountryRecord) -> Arc<CountryRecord> {
        let mut entries = self.entries.write();
        if let Some(existing) = entries.peek(&code).filter(|entry| self.is_fresh(entry)) {
            return Arc::clone(&existing.record);
        }

        let record = Arc::new(record);
        entries.put(
            code,
            CacheEntry {
                record: Arc::clone(&record),
                cached_at: Instant::now(),
            },
        );
        record
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        match self.ttl {
            Some(ttl) => entry.cached_at.elapsed() < ttl,
            None => true,
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(
            RESPONSE_CACHE_CAPACITY,
            Duration::from_secs(RESPONSE_CACHE_TTL_SECS),
        )
    }
}

// ---------------------------------------------------------------------------
// Cached source
// ---------------------------------------------------------------------------

/// A [`SpeciesSource`] that memoizes another source's successful records.
///
/// Failures are never cached.
pub struct CachedSpeciesSource {
    inner: Arc<dyn SpeciesSource>,
    cache: ResponseCache,
}

impl CachedSpeciesSource {
    pub fn new(inner: Arc<dyn SpeciesSource>, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }
}

#[async_trait::async_trait]
impl SpeciesSource for CachedSpeciesSource {
    async fn country_data(&self, code: &CountryCode) -> Result<CountryRecord, AppError> {
        if let Some(record) = self.cache.get(code) {
            log::debug!("Cache hit for {}", code);
            return Ok(record.as_ref().clone());
        }

        log::debug!("Cache miss for {}", code);
        let record = self.inner.country_data(code).await?;
        let cached = self.cache.insert(code.clone(), record);
        Ok(cached.as_ref().clone())
    }
}
