//! pdfcrawl CLI
//!
//! Crawls a website from a root URL and collects every reachable PDF.

use std::path::PathBuf;

use clap::Parser;
use pdfcrawl::{
    error::Result,
    fetch,
    models::{Config, CrawlRequest, FetchStrategy},
    services::TraversalEngine,
    storage::{self, LocalStore},
};
use url::Url;

/// pdfcrawl - PDF discovery crawler
#[derive(Parser, Debug)]
#[command(
    name = "pdfcrawl",
    version,
    about = "Collects PDF documents reachable from a web page"
)]
struct Cli {
    /// Root URL to start crawling from
    url: Url,

    /// How many link hops to follow from the root
    depth: u32,

    /// Page fetch strategy
    #[arg(long, value_enum, default_value_t = FetchStrategy::Static)]
    strategy: FetchStrategy,

    /// Download discovered PDFs into the output directory
    #[arg(long)]
    download: bool,

    /// Write the discovered PDF URLs to this file, one per line
    #[arg(long)]
    export: Option<PathBuf>,

    /// Directory for downloaded PDFs (overrides the config value)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, default_value = "pdfcrawl.toml")]
    config: PathBuf,

    /// Print the crawl outcome as JSON instead of a plain URL list
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("pdfcrawl starting...");

    let mut config = Config::load_or_default(&cli.config);
    if let Some(dir) = cli.output_dir {
        config.storage.output_dir = dir;
    }
    config.validate()?;

    // A rendered crawl acquires its browser session here; if that fails
    // there is no fallback to the static strategy.
    let fetcher = fetch::build(cli.strategy, &config.crawler)?;

    let request = CrawlRequest::new(cli.url.clone(), cli.depth);
    let engine = TraversalEngine::new(fetcher.as_ref());
    let outcome = engine.crawl(&request).await?;

    log::info!(
        "crawl finished: {} PDFs found, {} pages fetched, {} warnings",
        outcome.stats.artifact_count,
        outcome.stats.pages_fetched,
        outcome.stats.warning_count
    );
    for warning in &outcome.warnings {
        log::warn!("{}: {}", warning.url, warning.cause);
    }

    if cli.download {
        let client = fetch::create_client(&config.crawler)?;
        let store = LocalStore::new(client, &config.storage.output_dir);
        let summary = store.save_artifacts(&outcome.artifacts).await?;
        log::info!(
            "downloaded {} PDFs to {} ({} failed)",
            summary.saved.len(),
            config.storage.output_dir.display(),
            summary.failures.len()
        );
    }

    if let Some(path) = &cli.export {
        storage::export_url_list(path, &outcome.artifacts).await?;
        log::info!(
            "exported {} URLs to {}",
            outcome.artifacts.len(),
            path.display()
        );
    }

    if cli.json {
        let report = serde_json::json!({
            "artifacts": outcome.artifacts,
            "warnings": outcome
                .warnings
                .iter()
                .map(|w| serde_json::json!({
                    "url": w.url,
                    "cause": w.cause.to_string(),
                }))
                .collect::<Vec<_>>(),
            "stats": outcome.stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for url in &outcome.artifacts {
            println!("{url}");
        }
    }

    log::info!("Done!");

    Ok(())
}
