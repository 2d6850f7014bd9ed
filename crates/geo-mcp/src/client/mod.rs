//! NCBI Entrez E-Utilities client.
//!
//! Provides the two low-level calls the GEO search flow is built on:
//! - `esearch.fcgi`: resolve a term to a list of record identifiers
//! - `esummary.fcgi`: fetch summaries for a list of identifiers
//!
//! Both return the parsed JSON body untouched. There is no retry, rate
//! limiting or caching; transport timeouts come from [`Config`].

mod params;

pub use params::{Credentials, esearch_params, esummary_params, join_ids};

use reqwest::Client;
use serde_json::Value;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// The ESearch/ESummary pair the search facade runs against.
#[async_trait::async_trait]
pub trait Eutils: Send + Sync {
    /// Run ESearch against `collection` and return the raw JSON response.
    async fn search(&self, collection: &str, term: &str, max_results: u32) -> ClientResult<Value>;

    /// Run ESummary for `ids` in `collection` and return the raw JSON response.
    async fn summarize(&self, collection: &str, ids: &[String]) -> ClientResult<Value>;
}

/// E-Utilities HTTP client.
#[derive(Clone)]
pub struct EutilsClient {
    /// HTTP client.
    client: Client,

    /// E-Utilities root, without trailing slash.
    base_url: String,

    /// Contact email.
    email: Option<String>,

    /// API key (optional).
    api_key: Option<String>,
}

impl EutilsClient {
    /// Create a new client with the given configuration.
    ///
    /// A missing email is not an error here; it surfaces on the first query.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("geo-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            email: config.email,
            api_key: config.api_key,
        })
    }

    /// E-Utilities root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if a contact email is configured.
    #[must_use]
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn credentials(&self) -> ClientResult<Credentials<'_>> {
        Credentials::new(self.email.as_deref(), self.api_key.as_deref())
    }

    /// Make a GET request against an E-Utilities endpoint.
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> ClientResult<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self.client.get(&url).query(params).send().await?;
        let response = Self::handle_response(endpoint, response).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Map non-2xx statuses to [`ClientError::RemoteRequest`].
    async fn handle_response(
        endpoint: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "E-Utilities response");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            text
        };

        tracing::warn!(endpoint, status = status.as_u16(), "E-Utilities request failed");
        Err(ClientError::remote(status.as_u16(), message))
    }
}

#[async_trait::async_trait]
impl Eutils for EutilsClient {
    async fn search(&self, collection: &str, term: &str, max_results: u32) -> ClientResult<Value> {
        let params = esearch_params(collection, term, max_results, self.credentials()?);

        tracing::debug!(db = collection, term, retmax = max_results, "ESearch");
        self.get(api::ESEARCH, &params).await
    }

    async fn summarize(&self, collection: &str, ids: &[String]) -> ClientResult<Value> {
        let params = esummary_params(collection, ids, self.credentials()?);

        tracing::debug!(db = collection, count = ids.len(), "ESummary");
        self.get(api::ESUMMARY, &params).await
    }
}

impl std::fmt::Debug for EutilsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EutilsClient")
            .field("base_url", &self.base_url)
            .field("has_email", &self.has_email())
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
