use crate::errors::{LookupError, LookupResult};
use crate::lookup::TransactionLookup;
use crate::types::LedgerTransaction;
use bitcoin::Txid;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// Thread-safe memoising wrapper around another lookup
///
/// Only successful lookups are cached; failures are returned and retried on
/// the next request.
pub struct CachedLookup<L> {
    inner: L,
    cache: Mutex<HashMap<Txid, LedgerTransaction>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<L: TransactionLookup> CachedLookup<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Number of cached transactions
    pub fn size(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: TransactionLookup> TransactionLookup for CachedLookup<L> {
    fn get_transaction(&self, txid: &Txid) -> LookupResult<LedgerTransaction> {
        {
            let cache = self
                .cache
                .lock()
                .map_err(|_| LookupError::Backend("transaction cache lock poisoned".to_string()))?;
            if let Some(tx) = cache.get(txid) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for transaction: {}", txid);
                return Ok(tx.clone());
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for transaction: {}", txid);

        // Lock is released while the inner lookup runs; concurrent misses on the
        // same txid may both fetch, and the later insert wins.
        let tx = self.inner.get_transaction(txid)?;
        self.cache
            .lock()
            .map_err(|_| LookupError::Backend("transaction cache lock poisoned".to_string()))?
            .insert(*txid, tx.clone());
        debug!("Cached transaction: {}", txid);

        Ok(tx)
    }
}

/// Cache performance statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Calculate the cache hit rate as a percentage
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            (self.hits as f64 / (self.hits + self.misses) as f64) * 100.0
        }
    }

    /// Get total cache requests
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }
}
