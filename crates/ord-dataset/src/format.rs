use std::fs;
use std::path::Path;

use crate::codec::{DatasetCodec, GzipProtoCodec, decode_binary, encode_binary};
use crate::dataset::Dataset;
use crate::error::DatasetError;

/// On-disk message encodings, selected by file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// `.pb`
    Binary,
    /// `.pb.gz`
    GzipBinary,
    /// `.json`, the plain mapping with 2-space indent.
    Json,
}

impl MessageFormat {
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DatasetError::UnsupportedFormat(path.to_path_buf()))?;

        if name.ends_with(".pb.gz") {
            Ok(Self::GzipBinary)
        } else if name.ends_with(".pb") {
            Ok(Self::Binary)
        } else if name.ends_with(".json") {
            Ok(Self::Json)
        } else {
            Err(DatasetError::UnsupportedFormat(path.to_path_buf()))
        }
    }
}

/// Read a dataset from `path`, decoding by its suffix.
pub fn load_message(path: &Path) -> Result<Dataset, DatasetError> {
    let format = MessageFormat::from_path(path)?;
    let bytes = fs::read(path)?;
    match format {
        MessageFormat::Binary => decode_binary(&bytes),
        MessageFormat::GzipBinary => GzipProtoCodec::default().decode(&bytes),
        MessageFormat::Json => Dataset::from_plain_mapping(serde_json::from_slice(&bytes)?),
    }
}

/// Write a dataset to `path`, encoding by its suffix. Overwrites.
pub fn write_message(dataset: &Dataset, path: &Path) -> Result<(), DatasetError> {
    let bytes = match MessageFormat::from_path(path)? {
        MessageFormat::Binary => encode_binary(dataset).to_vec(),
        MessageFormat::GzipBinary => GzipProtoCodec::default().encode(dataset)?.to_vec(),
        MessageFormat::Json => serde_json::to_vec_pretty(&dataset.to_plain_mapping()?)?,
    };
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ReactionRecord;
    use crate::schema::encoded_reaction;

    fn sample() -> Dataset {
        Dataset {
            reactions: vec![ReactionRecord::new(encoded_reaction("ord-hi"))],
            reaction_ids: vec!["ord-1".into()],
            ..Dataset::named("formats")
        }
    }

    #[test]
    fn detects_formats() {
        assert_eq!(
            MessageFormat::from_path(Path::new("a/b/set.pb.gz")).unwrap(),
            MessageFormat::GzipBinary
        );
        assert_eq!(
            MessageFormat::from_path(Path::new("set.pb")).unwrap(),
            MessageFormat::Binary
        );
        assert_eq!(
            MessageFormat::from_path(Path::new("set.json")).unwrap(),
            MessageFormat::Json
        );
    }

    #[test]
    fn rejects_unknown_suffix() {
        assert!(matches!(
            MessageFormat::from_path(Path::new("set.pbtxt")),
            Err(DatasetError::UnsupportedFormat(_))
        ));
        assert!(MessageFormat::from_path(Path::new("/")).is_err());
    }

    #[test]
    fn every_format_reloads() {
        let dir = tempfile::tempdir().unwrap();
        for file in ["set.pb", "set.pb.gz", "set.json"] {
            let path = dir.path().join(file);
            write_message(&sample(), &path).unwrap();
            assert_eq!(load_message(&path).unwrap(), sample(), "{file}");
        }
    }

    #[test]
    fn json_is_two_space_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.json");
        write_message(&Dataset::named("x"), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"name\": \"x\"\n}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_message(&dir.path().join("absent.pb.gz")),
            Err(DatasetError::Io(_))
        ));
    }
}
