use crate::util::*;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Source of remote documents. Catalogs only see this trait, so tests can serve recorded responses.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn builder() -> HttpFetcherBuilder {
        HttpFetcherBuilder::new()
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        Ok(self.get(url).await?.text().await?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        Ok(self.get(url).await?.bytes().await?.to_vec())
    }
}

pub struct HttpFetcherBuilder {
    timeout: Duration,
    user_agent: String,
}

impl HttpFetcherBuilder {
    pub fn new() -> Self {
        HttpFetcherBuilder {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MILLIS),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpFetcher> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Default for HttpFetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
