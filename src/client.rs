use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::PubMedArticle;
use crate::parser;

/// Client for the PubMed E-utilities ESearch and EFetch endpoints
///
/// Both calls request `retmode=xml` and run sequentially; a non-success
/// response aborts the operation with [`Error::Api`]. There is no retry and
/// no authentication.
///
/// # Example
///
/// ```no_run
/// use pharma_papers::PubMedClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PubMedClient::new();
///     let articles = client.search_and_fetch("cancer immunotherapy", 10).await?;
///     println!("Fetched {} articles", articles.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
}

impl PubMedClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pharma_papers::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_base_url("http://127.0.0.1:8080");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.effective_base_url().to_string(),
        }
    }

    /// Create a client with a custom reqwest client and default configuration
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: ClientConfig::new().effective_base_url().to_string(),
        }
    }

    /// Search PubMed and return matching article identifiers
    ///
    /// Identifiers come back in remote order, duplicates included. A query
    /// with no hits returns an empty vector and logs a warning.
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_article_ids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=xml",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("making ESearch API request");
        let xml = self.get_text(&url).await?;
        let ids = parser::parse_id_list(&xml)?;

        if ids.is_empty() {
            warn!("no articles found for the given query");
        } else {
            info!(results_found = ids.len(), "search completed");
        }

        Ok(ids)
    }

    /// Fetch article records for the given identifiers in one batched request
    ///
    /// An empty identifier list returns immediately without touching the
    /// network.
    #[instrument(skip(self), fields(ids_count = pmids.len()))]
    pub async fn fetch_articles(&self, pmids: &[String]) -> Result<Vec<PubMedArticle>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            pmids.join(",")
        );

        debug!("making EFetch API request");
        let xml = self.get_text(&url).await?;

        if xml.trim().is_empty() {
            return Ok(Vec::new());
        }

        let articles = parser::parse_articles(&xml)?;
        info!(
            requested = pmids.len(),
            fetched = articles.len(),
            "fetch completed"
        );

        Ok(articles)
    }

    /// Search and fetch in one call
    pub async fn search_and_fetch(&self, query: &str, limit: usize) -> Result<Vec<PubMedArticle>> {
        let pmids = self.search_article_ids(query, limit).await?;
        self.fetch_articles(&pmids).await
    }

    /// Issue a GET request and return the response body as text
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "API request failed");
            return Err(Error::Api {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
