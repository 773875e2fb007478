pub const API_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_CACHE_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_MAX_LOG_FILES: usize = 7;
pub const LOG_DIR: &str = "./logs";
pub const PROMPT: &str = "pokedex > ";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
