pub mod fetch;

use anyhow::Result;
use pubmed_fetcher::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
    max_results: usize,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new()
        .with_tool(tool)
        .with_max_results(max_results);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    if let Some(email) = email {
        config = config.with_email(email);
    }

    Ok(PubMedClient::with_config(config))
}
