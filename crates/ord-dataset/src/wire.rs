use bytes::Bytes;

use crate::dataset::{Dataset, ReactionRecord};

/// Protobuf wire form of `ord.Dataset`.
///
/// `reactions` is declared as repeated bytes: an embedded message and a bytes
/// field share the length-delimited wire type, so each reaction round-trips
/// byte-for-byte without knowing the `ord.Reaction` schema.
#[derive(Clone, PartialEq, prost::Message)]
pub(crate) struct DatasetProto {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(bytes = "bytes", repeated, tag = "3")]
    pub reactions: Vec<Bytes>,
    #[prost(string, repeated, tag = "4")]
    pub reaction_ids: Vec<String>,
    #[prost(string, tag = "5")]
    pub dataset_id: String,
}

impl From<DatasetProto> for Dataset {
    fn from(proto: DatasetProto) -> Self {
        Self {
            name: proto.name,
            description: proto.description,
            reactions: proto.reactions.into_iter().map(ReactionRecord::new).collect(),
            reaction_ids: proto.reaction_ids,
            dataset_id: proto.dataset_id,
        }
    }
}

impl From<&Dataset> for DatasetProto {
    fn from(dataset: &Dataset) -> Self {
        Self {
            name: dataset.name.clone(),
            description: dataset.description.clone(),
            reactions: dataset
                .reactions
                .iter()
                .map(|r| r.as_bytes().clone())
                .collect(),
            reaction_ids: dataset.reaction_ids.clone(),
            dataset_id: dataset.dataset_id.clone(),
        }
    }
}
