use std::io::{Read, Write};

use bytes::Bytes;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use prost::Message;

use crate::dataset::{Dataset, PlainMapping};
use crate::error::DatasetError;
use crate::wire::DatasetProto;

/// Boundary to the dataset schema library.
///
/// The pipeline only ever decodes downloaded bytes, encodes the combined
/// dataset, and converts it to a plain mapping for JSON output.
pub trait DatasetCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Dataset, DatasetError>;

    fn encode(&self, dataset: &Dataset) -> Result<Bytes, DatasetError>;

    fn to_plain_mapping(&self, dataset: &Dataset) -> Result<PlainMapping, DatasetError> {
        dataset.to_plain_mapping()
    }
}

/// Gzip-compressed binary protobuf, the `.pb.gz` format ORD publishes.
///
/// The gzip header carries no modification time, so encoding the same
/// dataset twice yields identical bytes.
#[derive(Debug, Clone, Copy)]
pub struct GzipProtoCodec {
    level: Compression,
}

impl GzipProtoCodec {
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Default for GzipProtoCodec {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl DatasetCodec for GzipProtoCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Dataset, DatasetError> {
        let mut raw = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut raw)?;
        decode_binary(&raw)
    }

    fn encode(&self, dataset: &Dataset) -> Result<Bytes, DatasetError> {
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        encoder.write_all(&encode_binary(dataset))?;
        Ok(Bytes::from(encoder.finish()?))
    }
}

/// Decode an uncompressed binary `ord.Dataset`.
pub fn decode_binary(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    Ok(DatasetProto::decode(bytes)?.into())
}

/// Encode to an uncompressed binary `ord.Dataset`.
pub fn encode_binary(dataset: &Dataset) -> Bytes {
    Bytes::from(DatasetProto::from(dataset).encode_to_vec())
}
