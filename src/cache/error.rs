use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache interval must be greater than zero (got {0:?})")]
    InvalidInterval(Duration),
}
