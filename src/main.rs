use std::io;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

use pokedex::{
    cache::PokeCache,
    cli::Cli,
    client::PokeApiClient,
    commands::Session,
    config::Settings,
    logging::{LogConfig, configure_global_tracing},
    repl,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let _log_guard = configure_global_tracing(LogConfig {
        level: cli.log_level,
        format: cli.log_format,
        file_path: cli.log_file.clone(),
        max_log_files: cli.log_max_files,
    })?;

    let settings = Settings::from_cli(&cli);
    tracing::info!("Starting Pokedex with {:?}", settings);

    let cache = Arc::new(PokeCache::from_config(&settings.cache_config())?);
    let client = PokeApiClient::new(&settings.base_url, cache.clone())?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    let stats = cache.stats();
    tracing::info!(
        "Cache: {} entries, {} hits, {} misses, hit rate {:.2}, {} bytes served, {} swept",
        stats.entries,
        stats.hits,
        stats.misses,
        stats.hit_rate,
        stats.bytes_served,
        stats.swept
    );
    cache.stop().await;

    result
}
