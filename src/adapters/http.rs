use crate::domain::model::AllowedWordResponse;
use crate::domain::ports::{AllowedWordsApi, WordListSource};
use crate::utils::error::{Result, WordListError};
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed client for both the list sources and the validity service.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    validator_endpoint: String,
}

impl HttpClient {
    pub fn new(validator_endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            validator_endpoint: validator_endpoint.into(),
        }
    }
}

#[async_trait]
impl WordListSource for HttpClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let fetch_error = |source| WordListError::FetchError {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?;
        tracing::debug!("Word list response status for {}: {}", url, response.status());

        response.text().await.map_err(fetch_error)
    }
}

#[async_trait]
impl AllowedWordsApi for HttpClient {
    async fn lookup(&self, word: &str) -> Result<AllowedWordResponse> {
        let response = self
            .client
            .get(&self.validator_endpoint)
            .query(&[("word", word)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str::<AllowedWordResponse>(&body)?)
    }
}
