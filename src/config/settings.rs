use crate::cache::CacheConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub cache_interval_secs: u64,
}

impl Settings {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            cache_interval_secs: cli.cache_interval_secs,
        }
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            interval_secs: self.cache_interval_secs,
        }
    }
}
