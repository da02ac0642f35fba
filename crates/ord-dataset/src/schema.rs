//! `ord.Reaction` schema, compiled from `proto/ord` at build time.
//!
//! Reactions travel through the binary path as opaque bytes. Only the JSON
//! mapping looks inside them, decoding each record against the embedded
//! descriptor so the output carries proto field names.

use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use prost::Message;
use prost_reflect::{DescriptorPool, DynamicMessage, Kind, MessageDescriptor, SerializeOptions};
use serde_json::Value;

use crate::error::DatasetError;

const DESCRIPTOR_SET: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/ord_descriptor.bin"));

static REACTION: LazyLock<MessageDescriptor> = LazyLock::new(|| {
    DescriptorPool::decode(DESCRIPTOR_SET)
        .expect("embedded descriptor set is valid")
        .get_message_by_name("ord.Reaction")
        .expect("descriptor set defines ord.Reaction")
});

/// JSON form of one encoded reaction.
///
/// Records that do not decode as `ord.Reaction` are emitted as the base64
/// string of their bytes so the mapping stays complete.
pub(crate) fn reaction_to_json(encoded: &Bytes) -> Value {
    match structured(encoded) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, bytes = encoded.len(), "reaction kept as base64");
            Value::String(STANDARD.encode(encoded))
        }
    }
}

/// Encoded reaction bytes from either JSON form written by [`reaction_to_json`].
pub(crate) fn reaction_from_json(value: Value) -> Result<Bytes, DatasetError> {
    match value {
        Value::String(text) => STANDARD
            .decode(text)
            .map(Bytes::from)
            .map_err(|e| DatasetError::InvalidMapping(format!("reaction is not base64: {e}"))),
        object @ Value::Object(_) => {
            let message = DynamicMessage::deserialize(REACTION.clone(), object)?;
            Ok(Bytes::from(message.encode_to_vec()))
        }
        other => Err(DatasetError::InvalidMapping(format!(
            "reaction must be an object or base64 string, got {other}"
        ))),
    }
}

fn structured(encoded: &Bytes) -> Result<Value, DatasetError> {
    let message = DynamicMessage::decode(REACTION.clone(), encoded.clone())?;
    let options = SerializeOptions::new().use_proto_field_name(true);
    let mut value = message.serialize_with_options(serde_json::value::Serializer, &options)?;
    sort_map_entries(&REACTION, &mut value);
    Ok(value)
}

/// Proto map fields come out in hash order; sort their keys so repeated runs
/// write identical JSON. Message fields keep field-number order.
fn sort_map_entries(desc: &MessageDescriptor, value: &mut Value) {
    let Value::Object(object) = value else {
        return;
    };
    for (name, child) in object.iter_mut() {
        let Some(field) = desc.get_field_by_name(name) else {
            continue;
        };
        let Kind::Message(nested) = field.kind() else {
            continue;
        };
        if field.is_map() {
            let Value::Object(entries) = child else {
                continue;
            };
            entries.sort_keys();
            if let Kind::Message(entry_desc) = nested.map_entry_value_field().kind() {
                for entry in entries.values_mut() {
                    sort_map_entries(&entry_desc, entry);
                }
            }
        } else if let Value::Array(items) = child {
            for item in items {
                sort_map_entries(&nested, item);
            }
        } else {
            sort_map_entries(&nested, child);
        }
    }
}

/// Minimal encoded `ord.Reaction` carrying only `reaction_id` (field 10).
#[cfg(test)]
pub(crate) fn encoded_reaction(id: &str) -> Vec<u8> {
    let mut out = vec![0x52, id.len() as u8];
    out.extend_from_slice(id.as_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_id_is_a_json_key() {
        let value = reaction_to_json(&Bytes::from(encoded_reaction("ord-1")));
        assert_eq!(value, serde_json::json!({ "reaction_id": "ord-1" }));
    }

    #[test]
    fn nested_fields_use_proto_names() {
        let message = serde_json::json!({
            "identifiers": [{ "type": "REACTION_SMILES", "value": "CC>>CO" }],
            "inputs": {
                "b": { "addition_order": 2 },
                "a": { "addition_order": 1 }
            },
            "reaction_id": "ord-2"
        });
        let bytes = reaction_from_json(message).unwrap();
        let value = reaction_to_json(&bytes);

        assert_eq!(value["identifiers"][0]["type"], "REACTION_SMILES");
        assert_eq!(value["reaction_id"], "ord-2");
        let inputs: Vec<&str> = value["inputs"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(inputs, ["a", "b"]);
    }

    #[test]
    fn undecodable_reaction_falls_back_to_base64() {
        // reaction_id claims 5 bytes but only 1 follows.
        let value = reaction_to_json(&Bytes::from_static(&[0x52, 0x05, b'a']));
        assert_eq!(value, "UgVh");
        assert_eq!(reaction_from_json(value).unwrap().as_ref(), &[0x52, 0x05, b'a']);
    }

    #[test]
    fn structured_reaction_reencodes_to_same_bytes() {
        let encoded = Bytes::from(encoded_reaction("ord-3"));
        let back = reaction_from_json(reaction_to_json(&encoded)).unwrap();
        assert_eq!(back, encoded);
    }

    #[test]
    fn unknown_reaction_field_rejected() {
        let err = reaction_from_json(serde_json::json!({ "bogus": 1 }));
        assert!(matches!(err, Err(DatasetError::Json(_))));
    }

    #[test]
    fn non_object_reaction_rejected() {
        assert!(matches!(
            reaction_from_json(serde_json::json!(7)),
            Err(DatasetError::InvalidMapping(_))
        ));
    }
}
