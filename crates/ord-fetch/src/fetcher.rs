use async_trait::async_trait;
use std::path::Path;

use crate::error::FetchError;

/// Retrieves a remote artifact into a local file.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Download `url` into `dest`, replacing any existing file.
    /// Returns the number of bytes written.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Sent as the `User-Agent` header by network backends.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("ord-subset/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
