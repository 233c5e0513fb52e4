//! Quill CLI
//!
//! Runs the blog statistics proxy, or queries the upstream directly.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quill_analytics::{analyze, search_by_title};
use quill_api::{ApiConfig, ApiServer};
use quill_core::types::BlogCollection;
use quill_upstream::UpstreamClient;

/// Quill - blog statistics proxy
#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on (defaults to PORT, then 3000)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
        /// Bind address (IPv4 or IPv6, e.g. `::`)
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: IpAddr,
    },

    /// Fetch the upstream collection once and print its statistics
    Stats,

    /// Fetch the upstream collection once and print titles matching a query
    Search {
        /// Case-insensitive title substring
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "quill=debug,info"
    } else {
        "quill=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(config, port, bind).await,
        Commands::Stats => cmd_stats(config).await,
        Commands::Search { query } => cmd_search(config, &query).await,
    }
}

/// Run API server
async fn cmd_serve(config: ApiConfig, port: Option<u16>, bind: IpAddr) -> Result<()> {
    let addr = SocketAddr::new(bind, port.unwrap_or(config.port));

    println!("{}", "Starting Quill API server...".cyan().bold());
    println!("   {} http://{}", "Listening on:".green(), addr);
    println!("   {} http://{}/health", "Health check:".dimmed(), addr);
    println!("   {} {}", "Upstream:".dimmed(), config.upstream.url);
    println!("\n   Press Ctrl+C to stop.\n");

    let server = ApiServer::new(config).context("Failed to build API server")?;

    server.run(addr).await?;

    Ok(())
}

async fn fetch(config: ApiConfig) -> Result<BlogCollection> {
    let client = UpstreamClient::with_config(config.upstream).context("Failed to build upstream client")?;
    debug!(url = client.url(), "Fetching blogs");
    client.fetch_blogs().await.context("Failed to fetch blogs")
}

/// Print statistics for a one-off fetch
async fn cmd_stats(config: ApiConfig) -> Result<()> {
    let blogs = fetch(config).await?;
    let stats = analyze(&blogs);

    println!("{}", "Blog statistics".cyan().bold());
    println!("   {} {}", "Total blogs:".green(), stats.total_blogs);
    println!(
        "   {} {}",
        "Longest title:".green(),
        stats.longest_title.as_deref().unwrap_or("(none)")
    );
    println!("   {} {}", "Privacy blogs:".green(), stats.privacy_blogs_count);
    println!("   {} {}", "Unique titles:".green(), stats.unique_titles.len());

    println!("\n{}", "JSON:".yellow().bold());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

/// Print records whose title matches the query
async fn cmd_search(config: ApiConfig, query: &str) -> Result<()> {
    let blogs = fetch(config).await?;
    let matching = search_by_title(&blogs, query)?;

    if matching.is_empty() {
        println!("{} '{}'", "No blogs match".yellow(), query);
        return Ok(());
    }

    println!("{} {} match(es) for '{}':", "Found".green(), matching.len(), query);
    for blog in &matching {
        println!("   {}", blog.title);
    }

    Ok(())
}
