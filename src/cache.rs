//! In-memory caching using moka
//!
//! Memoizes computed quotes keyed by the full selection. Quotes are a pure
//! function of the selection and the price tables, which never change while
//! the process runs, so a cached quote is always identical to a fresh one.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::CacheConfig;
use crate::pricing::{QuoteResult, Selection};

/// Application cache holding computed quotes
#[derive(Clone)]
pub struct QuoteCache {
    /// Quotes (selection -> result)
    pub quotes: Cache<Selection, Arc<QuoteResult>>,
    capacity: u64,
    ttl: Duration,
}

impl QuoteCache {
    /// Create a new cache instance with the configured capacity and TTL
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            quotes: Cache::builder()
                .max_capacity(config.capacity)
                .time_to_live(config.ttl)
                .build(),
            capacity: config.capacity,
            ttl: config.ttl,
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
            capacity: self.capacity,
            ttl_secs: self.ttl.as_secs(),
        }
    }

    /// Invalidate all cached quotes and wait for the eviction to settle
    pub async fn invalidate_all(&self) {
        self.quotes.invalidate_all();
        self.quotes.run_pending_tasks().await;
        info!("Quote cache invalidated");
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
    pub capacity: u64,
    pub ttl_secs: u64,
}
