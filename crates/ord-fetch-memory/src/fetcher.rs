use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::Mutex;

use ord_fetch::{FetchError, Fetcher};

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
pub enum Response {
    Body(Bytes),
    Status(u16),
    Unreachable(String),
}

/// Serves registered URLs from memory. Unregistered URLs behave as
/// unreachable hosts. Every request is recorded in order.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.responses.insert(url.into(), Response::Body(body.into()));
        self
    }

    #[must_use]
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), Response::Status(status));
        self
    }

    #[must_use]
    pub fn with_unreachable(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.responses
            .insert(url.into(), Response::Unreachable(reason.into()));
        self
    }

    /// URLs requested so far, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        self.requests.lock().await.push(url.to_string());

        match self.responses.get(url) {
            Some(Response::Body(body)) => {
                tokio::fs::write(dest, body).await?;
                tracing::debug!(%url, bytes = body.len(), "served from memory");
                Ok(body.len() as u64)
            }
            Some(Response::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Some(Response::Unreachable(reason)) => Err(FetchError::Request(reason.clone())),
            None => Err(FetchError::Request(format!("no route to {url}"))),
        }
    }
}
