use std::time::Duration;

/// Default NCBI E-utilities base URL
const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the PubMed client
///
/// Covers the base URL (overridable for tests against a mock server), the
/// request timeout, and the User-Agent string. The E-utilities endpoints used
/// here require no authentication.
///
/// # Example
///
/// ```
/// use pharma_papers::ClientConfig;
///
/// let config = ClientConfig::new().with_timeout(std::time::Duration::from_secs(10));
/// assert_eq!(
///     config.effective_base_url(),
///     "https://eutils.ncbi.nlm.nih.gov/entrez/eutils"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    user_agent: Option<String>,
    /// Request timeout applied to each HTTP call
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the E-utilities base URL (no trailing slash)
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        let url: String = base_url.into();
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pharma-papers/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
