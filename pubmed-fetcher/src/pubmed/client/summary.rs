//! ESummary API operations for fetching paper records

use crate::error::Result;
use crate::pubmed::models::PaperRecord;
use crate::pubmed::responses::{ESummaryDocSum, ESummaryResponse};
use tracing::{debug, info, instrument, warn};

use super::PubMedClient;

impl PubMedClient {
    /// Fetch paper records for the given identifiers with one ESummary request
    ///
    /// All identifiers are sent comma-joined in a single batched request.
    /// Records are returned in the order of `ids`; identifiers the response
    /// does not contain are dropped without error. An empty `ids` returns
    /// immediately without contacting the API.
    ///
    /// # Errors
    ///
    /// * `FetchError::RequestError` - If the HTTP request fails
    /// * `FetchError::ApiError` - On a non-success status
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
    ///     let ids = vec!["31978945".to_string(), "33515491".to_string()];
    ///     for record in client.fetch_details(&ids).await? {
    ///         println!("{:?}: {:?}", record.id, record.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_details(&self, ids: &[String]) -> Result<Vec<PaperRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_list = ids
            .iter()
            .map(|id| urlencoding::encode(id).into_owned())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/esummary.fcgi?db=pubmed&id={}&retmode=json",
            self.base_url, id_list
        );

        debug!(batch_size = ids.len(), "Making batch ESummary API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        let records = Self::parse_esummary_response(&json_text, ids)?;
        info!(
            requested = ids.len(),
            parsed = records.len(),
            "ESummary batch completed"
        );

        Ok(records)
    }

    /// Parse an ESummary JSON body, emitting one record per requested id present in `result`
    pub(crate) fn parse_esummary_response(
        json_text: &str,
        ids: &[String],
    ) -> Result<Vec<PaperRecord>> {
        let value: serde_json::Value = serde_json::from_str(json_text)?;

        let response: ESummaryResponse = serde_json::from_value(value).unwrap_or_default();
        let Some(result) = response.result.filter(|r| r.is_object()) else {
            warn!("ESummary response has no result object, treating as no records");
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(ids.len());

        for id in ids {
            let Some(doc_value) = result.get(id.as_str()) else {
                debug!(uid = %id, "UID not found in ESummary response");
                continue;
            };

            if !doc_value.is_object() {
                warn!(uid = %id, "ESummary entry is not an object, skipping");
                continue;
            }

            if let Some(error) = doc_value.get("error") {
                warn!(uid = %id, error = %error, "ESummary returned error for UID");
            }

            let doc: ESummaryDocSum = match serde_json::from_value(doc_value.clone()) {
                Ok(d) => d,
                Err(e) => {
                    warn!(uid = %id, error = %e, "Failed to parse ESummary document");
                    continue;
                }
            };

            records.push(PaperRecord::from_summary(doc));
        }

        Ok(records)
    }
}
