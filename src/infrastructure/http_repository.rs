// HTTP trends API repository implementation
use crate::application::trend_repository::TrendRepository;
use crate::domain::trend::TrendRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("trend request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("trend request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode trend response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches event-trend records with a GET to `{base_api_url}{endpoint}`.
#[derive(Debug, Clone)]
pub struct HttpTrendRepository {
    client: reqwest::Client,
    base_api_url: String,
    endpoint: String,
}

impl HttpTrendRepository {
    pub fn new(base_api_url: String, endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_api_url: base_api_url.trim_end_matches('/').to_string(),
            endpoint,
        }
    }

    pub fn trends_url(&self) -> String {
        format!("{}{}", self.base_api_url, self.endpoint)
    }
}

#[async_trait]
impl TrendRepository for HttpTrendRepository {
    async fn fetch_event_trends(&self) -> anyhow::Result<Vec<TrendRecord>> {
        let url = self.trends_url();
        tracing::debug!("Fetching event trends from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status }.into());
        }

        let records = response
            .json::<Vec<TrendRecord>>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("Fetched {} trend records from {}", records.len(), url);
        Ok(records)
    }
}
