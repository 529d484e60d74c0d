//! # pharma-papers
//!
//! Queries the PubMed E-utilities API and reports papers where at least one
//! author is affiliated with a pharmaceutical or biotechnology organization.
//!
//! The pipeline is a linear sequence of stages, each consuming the previous
//! stage's output:
//!
//! 1. **Identifier search** — one ESearch request returning PubMed IDs
//! 2. **Record fetch** — one batched EFetch request returning article XML
//! 3. **Field extraction** — pure classification of author affiliations
//! 4. **Presentation** — console table or CSV file
//!
//! ## Quick Start
//!
//! ```no_run
//! use pharma_papers::{PubMedClient, extract, report};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!     let articles = client.search_and_fetch("cancer immunotherapy", 10).await?;
//!     let rows = extract::rows_from_articles(&articles);
//!     report::print_table(&rows);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod parser;
pub mod report;

// Re-export main types for convenience
pub use client::PubMedClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{Author, PLACEHOLDER, PaperRow, PubMedArticle};
