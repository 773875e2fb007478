use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    pub interval_secs: u64,
}

impl CacheConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
