use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("protobuf decode failed: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported message format for '{}'", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("plain mapping is not a dataset: {0}")]
    InvalidMapping(String),
}
