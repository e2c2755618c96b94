use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::FetchError;
use crate::articles::{Article, ArticleDetail, ArticleId};
use crate::config::ApiConfig;

/// Client for the article REST endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ArticleClient {
    client: Client,
    endpoint: String,
}

impl ArticleClient {
    /// Build a client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL of a single article's detail record.
    pub fn article_url(&self, id: ArticleId) -> String {
        format!("{}/articles/{}", self.endpoint, id)
    }

    /// URL of the article listing.
    pub fn articles_url(&self) -> String {
        format!("{}/articles", self.endpoint)
    }

    /// `GET {endpoint}/articles/{id}`.
    pub async fn fetch_article(&self, id: ArticleId) -> Result<ArticleDetail, FetchError> {
        self.get_json(self.article_url(id)).await
    }

    /// `GET {endpoint}/articles`.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>, FetchError> {
        self.get_json(self.articles_url()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                url,
                status: status.as_u16(),
            });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}
