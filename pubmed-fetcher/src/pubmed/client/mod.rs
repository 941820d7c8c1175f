mod summary;

use crate::config::ClientConfig;
use crate::error::{FetchError, Result};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::responses::ESearchResult;
use crate::report::{ResultRow, build_report};
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Largest `retmax` ESearch honors in a single request
pub const MAX_RETRIEVABLE: usize = 9999;

/// Client for the PubMed ESearch and ESummary endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    pub(crate) base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        let config = ClientConfig::new();
        Self::with_config(config)
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration including API key, email, base URL, etc.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Create a new PubMed client with a custom HTTP client and default configuration
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in upstream order
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query
    /// * `max_results` - Result cap sent as `retmax` (at most [`MAX_RETRIEVABLE`])
    ///
    /// A blank query returns an empty list without contacting the API. A
    /// well-formed response lacking `esearchresult.idlist` is treated as zero
    /// results.
    ///
    /// # Errors
    ///
    /// * `FetchError::SearchLimitExceeded` - If `max_results` exceeds [`MAX_RETRIEVABLE`]
    /// * `FetchError::RequestError` - If the HTTP request fails
    /// * `FetchError::ApiError` - On a non-success status or an NCBI-reported error
    /// * `FetchError::JsonError` - If the body is not valid JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_articles("cancer immunotherapy", 20).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_articles(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        if max_results > MAX_RETRIEVABLE {
            return Err(FetchError::SearchLimitExceeded {
                requested: max_results,
                maximum: MAX_RETRIEVABLE,
            });
        }

        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        let ids = Self::parse_esearch_response(&json_text)?;
        info!(found = ids.len(), "ESearch completed");

        Ok(ids)
    }

    /// Search and fetch paper records in a single operation
    ///
    /// Runs [`search_articles`](Self::search_articles) followed by
    /// [`fetch_details`](Self::fetch_details). A failure in either step fails
    /// the whole operation.
    pub async fn search_and_fetch_details(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<PaperRecord>> {
        let ids = self.search_articles(query, max_results).await?;
        self.fetch_details(&ids).await
    }

    /// Search, fetch and flatten into report rows using the configured result cap
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     for row in client.fetch_report("cancer").await? {
    ///         println!("{}: {}", row.pubmed_id, row.company_affiliations);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_report(&self, query: &str) -> Result<Vec<ResultRow>> {
        let records = self
            .search_and_fetch_details(query, self.config.effective_max_results())
            .await?;
        Ok(build_report(&records))
    }

    /// Parse an ESearch JSON body into its identifier list
    pub(crate) fn parse_esearch_response(json_text: &str) -> Result<Vec<String>> {
        let value: serde_json::Value = serde_json::from_str(json_text)?;

        let search_result: ESearchResult = match serde_json::from_value(value) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Unexpected ESearch response shape, treating as no results");
                return Ok(Vec::new());
            }
        };

        let Some(data) = search_result.esearchresult else {
            warn!("ESearch response has no esearchresult field, treating as no results");
            return Ok(Vec::new());
        };

        // NCBI sometimes returns 200 OK with an ERROR field
        if let Some(error_msg) = data.error {
            return Err(FetchError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let Some(ids) = data.idlist else {
            warn!("ESearch response has no idlist field, treating as no results");
            return Ok(Vec::new());
        };

        let total_count = data.count.as_deref().and_then(|c| c.parse::<usize>().ok());
        if let Some(total) = total_count {
            if total > ids.len() {
                debug!(total, returned = ids.len(), "Search results truncated at result cap");
            }
        }

        Ok(ids)
    }

    /// Issue a GET request, appending API parameters (api_key, email, tool) to the URL.
    /// Any non-success status is returned as `FetchError::ApiError`.
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(FetchError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
