use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DatasetError;
use crate::schema;

/// Plain key-ordered mapping produced from a [`Dataset`].
pub type PlainMapping = serde_json::Map<String, serde_json::Value>;

/// An ORD dataset: a name plus an ordered list of reactions.
///
/// Field order and names follow the `ord.Dataset` schema. Fields holding
/// their default value are left out of the plain mapping, matching the
/// protobuf JSON conventions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reactions: Vec<ReactionRecord>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reaction_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dataset_id: String,
}

impl Dataset {
    /// Empty dataset with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append clones of the first `limit` reactions of `other`.
    ///
    /// Returns how many were appended: `min(limit, other.reactions.len())`.
    pub fn extend_from_prefix(&mut self, other: &Dataset, limit: usize) -> usize {
        let prefix = &other.reactions[..other.reactions.len().min(limit)];
        self.reactions.extend_from_slice(prefix);
        prefix.len()
    }

    /// Convert to a plain mapping keyed by schema field names.
    ///
    /// # Errors
    /// Returns `DatasetError::InvalidMapping` if the value does not serialize
    /// to a JSON object.
    pub fn to_plain_mapping(&self) -> Result<PlainMapping, DatasetError> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(DatasetError::InvalidMapping(format!(
                "expected object, got {other}"
            ))),
        }
    }

    /// Rebuild a dataset from a plain mapping. Missing fields take defaults.
    ///
    /// # Errors
    /// Returns a `DatasetError::Json` if a field has the wrong shape.
    pub fn from_plain_mapping(map: PlainMapping) -> Result<Self, DatasetError> {
        Ok(serde_json::from_value(serde_json::Value::Object(map))?)
    }
}

/// One encoded `ord.Reaction` message, carried verbatim.
///
/// The binary codec never looks inside. The plain mapping decodes it against
/// the `ord.Reaction` schema and writes its fields by proto name; bytes that
/// do not decode are written as a base64 string instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord(Bytes);

impl ReactionRecord {
    pub fn new(encoded: impl Into<Bytes>) -> Self {
        Self(encoded.into())
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }
}

impl Serialize for ReactionRecord {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        schema::reaction_to_json(&self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for ReactionRecord {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        schema::reaction_from_json(value)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
