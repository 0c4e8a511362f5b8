// src/api/country_index.rs
//! Best-effort country code → name lookup shared across requests.
//!
//! The index starts empty and is filled once by a detached task. Reads never
//! wait for that task: until it lands, or if it fails, lookups echo the code
//! back. Callers must treat the result as possibly stale or empty.

use super::RedListRepository;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct CountryNameIndex {
    names: RwLock<HashMap<String, String>>,
    populated: AtomicBool,
}

impl CountryNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `code`, or `code` itself when unknown.
    ///
    /// Never blocks: if the writer holds the lock the lookup is a miss.
    pub fn lookup(&self, code: &str) -> String {
        let key = code.to_uppercase();
        self.names
            .try_read()
            .and_then(|names| names.get(&key).filter(|name| !name.is_empty()).cloned())
            .unwrap_or_else(|| code.to_string())
    }

    /// Merges `names` into the index. Keys are uppercased.
    pub fn populate(&self, names: HashMap<String, String>) {
        let mut guard = self.names.write();
        guard.extend(
            names
                .into_iter()
                .map(|(code, name)| (code.to_uppercase(), name)),
        );
        self.populated.store(true, Ordering::Release);
    }

    pub fn is_populated(&self) -> bool {
        self.populated.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetches the country list once in the background and fills the index.
    ///
    /// Failure is logged and otherwise ignored; nothing retries. The handle is
    /// returned for tests and may be dropped.
    pub fn spawn_population(
        self: &Arc<Self>,
        repository: Arc<dyn RedListRepository>,
    ) -> JoinHandle<()> {
        let index = Arc::clone(self);
        tokio::spawn(async move {
            match repository.list_countries().await {
                Ok(names) => {
                    let count = names.len();
                    index.populate(names);
                    log::info!("Country name index populated with {} entries", count);
                }
                Err(e) => {
                    log::warn!("Country name index population failed: {}", e);
                }
            }
        })
    }
}
