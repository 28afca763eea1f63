use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::config::DocStoreConfig;
use crate::domain::RawDocument;
use crate::error::Result;
use crate::source::RecordSource;

/// HTTP client for the document store the crawler writes into.
pub struct DocStoreSource {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl DocStoreSource {
    pub fn new(config: DocStoreConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token,
        }
    }
}

#[async_trait]
impl RecordSource for DocStoreSource {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawDocument>> {
        let url = format!("{}/collections/{}/documents", self.base_url, collection);
        info!("Fetching all documents from {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let documents: Vec<RawDocument> = response.json().await?;
        info!(
            "Fetched {} documents from collection '{}'",
            documents.len(),
            collection
        );
        Ok(documents)
    }
}
