use std::path::PathBuf;

use ord_dataset::DatasetError;
use ord_fetch::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubsetError {
    #[error("download: {0}")]
    Fetch(#[from] FetchError),

    #[error("dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("writing {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration: {0}")]
    Config(String),
}
