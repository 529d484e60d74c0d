use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pharma_papers::{PubMedClient, extract, report};

#[derive(Parser)]
#[command(
    name = "pharma-papers",
    about = "Find PubMed papers with pharma/biotech-affiliated authors",
    long_about = "Searches PubMed for a query, fetches the matching records, and reports \
                  authors whose affiliation indicates a pharmaceutical or biotechnology \
                  organization."
)]
struct Cli {
    /// Search query for PubMed
    #[arg(value_name = "QUERY")]
    query: String,

    /// Maximum number of articles to fetch
    #[arg(long, default_value = "10")]
    max_results: usize,

    /// Save output to a CSV file instead of printing a table
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let client = PubMedClient::new();

    let pmids = client.search_article_ids(&cli.query, cli.max_results).await?;
    let articles = client.fetch_articles(&pmids).await?;
    let rows = extract::rows_from_articles(&articles);

    if rows.is_empty() {
        warn!("no pharma/biotech-affiliated papers found");
        return Ok(());
    }

    match &cli.file {
        Some(path) => report::write_csv(&rows, path)?,
        None => report::print_table(&rows),
    }

    Ok(())
}
