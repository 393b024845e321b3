//! trisearch CLI - query the search aggregator and print the three result lists.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trisearch::{
    ClientConfig, Entry, HttpBackend, MemoryRegion, MissingProviders, Provider, QueryField,
    QuerySubmitter, Regions, ResultRenderer, SearchForm, DEFAULT_BASE_URL,
};

/// trisearch - Google, Bing and Baidu results side by side
#[derive(Parser)]
#[command(name = "trisearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search through the aggregator
    Search(SearchArgs),

    /// List providers and their result regions
    Providers,
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query (sent as-is, may be empty)
    query: String,

    /// Aggregator base URL
    #[arg(short, long, env = "TRISEARCH_SERVER", default_value = DEFAULT_BASE_URL)]
    server: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Render a missing or null provider list as empty instead of failing
    #[arg(long)]
    lenient: bool,

    /// Request timeout in seconds (none by default)
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[derive(Serialize)]
struct RegionOutput {
    provider: Provider,
    region: String,
    entries: Vec<Entry>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => run_search(args).await,
        Commands::Providers => list_providers(),
    }
}

fn list_providers() -> Result<()> {
    println!("Providers (in display order):\n");
    for provider in Provider::ALL {
        println!("  {:<8} - {} (region: {})", provider.name(), provider.label(), provider.region_id());
    }
    println!();
    println!("Usage: trisearch search \"query\" --server {}", DEFAULT_BASE_URL);
    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let policy = if args.lenient {
        MissingProviders::Empty
    } else {
        MissingProviders::Reject
    };
    let mut config = ClientConfig::default()
        .with_base_url(&args.server)
        .with_missing_providers(policy);
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs);
    }

    let backend = HttpBackend::new(config)?;
    let regions = Regions::in_memory();
    let submitter = QuerySubmitter::new(Arc::new(backend), ResultRenderer::new(regions.clone()));
    let form = SearchForm::new(QueryField::new(&args.query), submitter);

    // Errors are logged by the task itself; the regions keep whatever they held.
    form.submit().task.await?;

    let mut output = Vec::with_capacity(Provider::ALL.len());
    for provider in Provider::ALL {
        let region = regions.get(provider).lock().await;
        output.push(snapshot(provider, &region));
    }

    match args.format {
        OutputFormat::Text => {
            println!("\nSearch results for \"{}\":\n", args.query);
            for region in &output {
                println!(
                    "{} [{}] ({} results)",
                    region.provider.label(),
                    region.region,
                    region.entries.len()
                );
                for (i, entry) in region.entries.iter().enumerate() {
                    println!("  {}. {}", i + 1, entry.anchor.text);
                    println!("     URL: {}", entry.anchor.href);
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Compact => {
            for region in &output {
                for entry in &region.entries {
                    println!("{}\t{}\t{}", region.provider, entry.anchor.text, entry.anchor.href);
                }
            }
        }
    }

    Ok(())
}

fn snapshot(provider: Provider, region: &MemoryRegion) -> RegionOutput {
    RegionOutput {
        provider,
        region: region.id().to_string(),
        entries: region.entries().to_vec(),
    }
}
