use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

/// A stored response body together with the moment it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub created_at: Instant,
    pub value: Bytes,
}

impl CacheEntry {
    pub fn new(value: Bytes) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    /// An entry is expired only once its age is strictly greater than `ttl`.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}
