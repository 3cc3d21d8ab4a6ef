//! Single-flight result cache.
//!
//! Completed values live in a `moka` cache bounded by entry count and
//! time-to-live. Computations in progress live in a separate map of shared
//! futures: a request for a key that is already being computed joins the
//! existing computation instead of starting another.
//!
//! Each computation runs in its own detached task. Callers only hold a
//! shared handle to its result, so a caller that gives up (drops its
//! future) never cancels work other callers are waiting on. Failed
//! computations are reported to every waiter and are not cached.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use serde::Serialize;

use crate::config::CacheConfig;
use crate::error::ChartError;

type SharedResult<V> = Shared<BoxFuture<'static, Result<V, ChartError>>>;
type InFlight<K, V> = Arc<Mutex<HashMap<K, SharedResult<V>>>>;

/// Cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    /// Served from a completed entry.
    pub hits: u64,
    /// Started a new computation.
    pub misses: u64,
    /// Joined a computation already in flight.
    pub coalesced: u64,
    /// Completed entries currently held.
    pub entries: u64,
}

/// Concurrent get-or-compute cache with at most one computation per key.
pub struct ComputationCache<K, V> {
    name: &'static str,
    ready: moka::sync::Cache<K, V>,
    in_flight: InFlight<K, V>,
    hits: AtomicU64,
    misses: AtomicU64,
    coalesced: AtomicU64,
}

/// Removes the in-flight entry when the computation task ends, including
/// by panic.
struct InFlightGuard<K: Hash + Eq, V> {
    map: InFlight<K, V>,
    key: K,
}

impl<K: Hash + Eq, V> Drop for InFlightGuard<K, V> {
    fn drop(&mut self) {
        self.map.lock().remove(&self.key);
    }
}

impl<K, V> ComputationCache<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, config: &CacheConfig) -> Self {
        let ready = moka::sync::Cache::builder()
            .name(name)
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl())
            .build();
        Self {
            name,
            ready,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            coalesced: AtomicU64::new(0),
        }
    }

    /// Completed value for `key`, if cached.
    pub fn get(&self, key: &K) -> Option<V> {
        self.ready.get(key)
    }

    /// Cached value, or the result of the single computation for `key`.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn get_or_compute<F, Fut>(&self, key: K, compute: F) -> Result<V, ChartError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ChartError>> + Send + 'static,
    {
        self.get_or_compute_if(key, compute, |_| true).await
    }

    /// Like [`Self::get_or_compute`], but a successful value is only kept
    /// when `keep` accepts it. Waiters that joined the computation receive
    /// it either way.
    pub async fn get_or_compute_if<F, Fut, P>(
        &self,
        key: K,
        compute: F,
        keep: P,
    ) -> Result<V, ChartError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ChartError>> + Send + 'static,
        P: FnOnce(&V) -> bool + Send + 'static,
    {
        let shared = {
            let mut in_flight = self.in_flight.lock();
            // Checked under the lock: a finishing task inserts its value
            // before it removes itself from `in_flight`.
            if let Some(value) = self.ready.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(cache = self.name, "hit");
                return Ok(value);
            }
            if let Some(existing) = in_flight.get(&key) {
                self.coalesced.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(cache = self.name, "joined in-flight computation");
                existing.clone()
            } else {
                self.misses.fetch_add(1, Ordering::Relaxed);
                let shared = self.spawn_computation(key.clone(), compute(), keep);
                in_flight.insert(key, shared.clone());
                shared
            }
        };
        shared.await
    }

    fn spawn_computation<Fut, P>(&self, key: K, fut: Fut, keep: P) -> SharedResult<V>
    where
        Fut: Future<Output = Result<V, ChartError>> + Send + 'static,
        P: FnOnce(&V) -> bool + Send + 'static,
    {
        let ready = self.ready.clone();
        let guard = InFlightGuard {
            map: Arc::clone(&self.in_flight),
            key,
        };
        let name = self.name;
        let handle = tokio::spawn(async move {
            let result = fut.await;
            match &result {
                Ok(value) => {
                    if keep(value) {
                        ready.insert(guard.key.clone(), value.clone());
                    } else {
                        tracing::debug!(cache = name, "result not retained");
                    }
                }
                Err(e) => tracing::debug!(cache = name, error = %e, "computation failed"),
            }
            drop(guard);
            result
        });
        async move {
            handle
                .await
                .unwrap_or_else(|e| Err(ChartError::Internal(format!("computation task: {e}"))))
        }
        .boxed()
        .shared()
    }

    pub fn stats(&self) -> CacheStats {
        self.ready.run_pending_tasks();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            coalesced: self.coalesced.load(Ordering::Relaxed),
            entries: self.ready.entry_count(),
        }
    }

    /// Number of computations currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().len()
    }

    pub fn invalidate_all(&self) {
        self.ready.invalidate_all();
    }
}
