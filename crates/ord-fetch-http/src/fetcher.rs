use async_trait::async_trait;
use std::path::Path;

use ord_fetch::{FetchConfig, FetchError, Fetcher};

use crate::error::map_reqwest_err;

/// Plain HTTP(S) GET backend. Follows redirects; no retries and no
/// timeout beyond the client defaults.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(map_reqwest_err)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_err)?
            .error_for_status()
            .map_err(map_reqwest_err)?;

        let body = response.bytes().await.map_err(map_reqwest_err)?;
        tokio::fs::write(dest, &body).await?;

        tracing::debug!(%url, path = %dest.display(), bytes = body.len(), "fetched");
        Ok(body.len() as u64)
    }
}
