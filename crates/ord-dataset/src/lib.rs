mod codec;
mod dataset;
mod error;
mod format;
mod schema;
mod wire;

pub use codec::{DatasetCodec, GzipProtoCodec, decode_binary, encode_binary};
pub use dataset::{Dataset, PlainMapping, ReactionRecord};
pub use error::DatasetError;
pub use format::{MessageFormat, load_message, write_message};
