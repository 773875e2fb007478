pub mod types;

use clap::Parser;

use crate::config::{API_URL, DEFAULT_CACHE_INTERVAL_SECS};
use types::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "pokedex",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore PokeAPI location areas and catch Pokemon from an interactive prompt",
    long_about = None
)]
pub struct Cli {
    #[arg(long, default_value = API_URL, help = "Base URL of the PokeAPI v2 endpoints")]
    pub base_url: String,

    #[arg(
        short = 'c',
        long,
        default_value_t = DEFAULT_CACHE_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds a cached response lives, also the sweep period"
    )]
    pub cache_interval_secs: u64,

    #[arg(
        short,
        long,
        default_value = "warn",
        value_enum,
        help = "Logging level"
    )]
    pub log_level: LogLevel,

    #[arg(long, help = "Path prefix of a daily rolling log file (logs go to stderr otherwise)")]
    pub log_file: Option<String>,

    #[arg(long, default_value = "compact", value_enum, help = "Log output format")]
    pub log_format: LogFormat,

    #[arg(
        long,
        help = "Maximum number of log files to retain (only applies if log_file is set)"
    )]
    pub log_max_files: Option<usize>,
}
