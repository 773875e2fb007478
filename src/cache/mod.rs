// Response cache shared by the API client and a background sweeper task.
// Entries are raw response bodies keyed by request URL; the only expiry
// mechanism is the sweeper, lookups never filter stale entries.

pub mod config;
pub use config::CacheConfig;

pub mod entry;
pub use entry::CacheEntry;

pub mod error;
pub use error::CacheError;

pub mod metrics;
pub use metrics::CacheMetrics;

pub mod stats;
pub use stats::CacheStats;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::Ordering;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self as TokioTime, Instant, MissedTickBehavior};

type Entries = RwLock<HashMap<String, CacheEntry>>;

/// The two calls the request layer makes against a cache.
pub trait ResponseCache: Send + Sync {
    fn insert(&self, key: &str, value: Bytes);
    fn lookup(&self, key: &str) -> Option<Bytes>;
}

pub struct PokeCache {
    entries: Arc<Entries>,
    interval: Duration,
    metrics: Arc<CacheMetrics>,
    shutdown: watch::Sender<bool>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl PokeCache {
    /// Builds the cache and spawns its sweeper on the current tokio runtime.
    ///
    /// `interval` is both the entry time-to-live and the sweep period.
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }

        let entries = Arc::new(RwLock::new(HashMap::new()));
        let metrics = Arc::new(CacheMetrics::default());
        let (shutdown, shutdown_rx) = watch::channel(false);

        // First tick one full interval after construction, not immediately.
        let first_tick = Instant::now() + interval;

        let entries_clone = Arc::clone(&entries);
        let metrics_clone = Arc::clone(&metrics);
        let sweeper = tokio::spawn(async move {
            Self::sweep_loop(entries_clone, metrics_clone, first_tick, interval, shutdown_rx)
                .await;
        });

        tracing::debug!("Cache created with interval {:?}", interval);

        Ok(Self {
            entries,
            interval,
            metrics,
            shutdown,
            sweeper: Mutex::new(Some(sweeper)),
        })
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self, CacheError> {
        Self::new(config.interval())
    }

    #[tracing::instrument(skip_all, level = "trace", name = "CacheSweepLoop")]
    async fn sweep_loop(
        entries: Arc<Entries>,
        metrics: Arc<CacheMetrics>,
        first_tick: Instant,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker = TokioTime::interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                tick = ticker.tick() => {
                    let removed = sweep(&entries, tick, interval);
                    metrics.record_swept(removed);

                    tracing::trace!("Cache sweep: removed {} expired entries", removed);
                }
                // Either an explicit stop or the cache itself was dropped.
                _ = shutdown.changed() => break,
            }
        }

        tracing::debug!("Cache sweeper stopped");
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let entry = CacheEntry::new(value.into());
        write_entries(&self.entries).insert(key.into(), entry);
    }

    pub fn lookup(&self, key: &str) -> Option<Bytes> {
        let value = read_entries(&self.entries)
            .get(key)
            .map(|entry| entry.value.clone());

        match &value {
            Some(bytes) => self.metrics.record_hit(bytes.len()),
            None => self.metrics.record_miss(),
        }

        value
    }

    pub fn len(&self) -> usize {
        read_entries(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hit_rate: self.metrics.hit_rate(),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            bytes_served: self.metrics.bytes_served.load(Ordering::Relaxed),
            swept: self.metrics.swept.load(Ordering::Relaxed),
        }
    }

    /// Stops the sweeper and waits for its task to exit.
    ///
    /// The map stays usable afterwards but nothing expires anymore.
    /// Calling this more than once is a no-op.
    pub async fn stop(&self) {
        self.shutdown.send_replace(true);

        let handle = self
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!("Cache sweeper ended abnormally: {}", e);
            }
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_none_or(|handle| handle.is_finished())
    }
}

impl ResponseCache for PokeCache {
    fn insert(&self, key: &str, value: Bytes) {
        PokeCache::insert(self, key, value);
    }

    fn lookup(&self, key: &str) -> Option<Bytes> {
        PokeCache::lookup(self, key)
    }
}

/// Removes every entry older than `interval` as of `now`, returning how many went.
///
/// Candidates are collected under the read lock; each delete then takes the
/// write lock on its own so a long sweep never holds off callers for the whole pass.
fn sweep(entries: &Entries, now: Instant, interval: Duration) -> usize {
    let expired_keys: Vec<String> = read_entries(entries)
        .iter()
        .filter_map(|(key, entry)| {
            if entry.is_expired_at(now, interval) {
                Some(key.clone())
            } else {
                None
            }
        })
        .collect();

    for key in &expired_keys {
        write_entries(entries).remove(key);
    }

    expired_keys.len()
}

// No cross-key invariant exists, so a poisoned map is still consistent.
fn read_entries(entries: &Entries) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
    entries.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_entries(entries: &Entries) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
    entries.write().unwrap_or_else(PoisonError::into_inner)
}
