use std::path::{Path, PathBuf};

use ord_dataset::{Dataset, DatasetCodec};

use crate::config::SubsetConfig;
use crate::error::SubsetError;

/// Paths of the two files written for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub binary: PathBuf,
    pub json: PathBuf,
}

/// Write the combined dataset as `.pb.gz` and then as `.json`.
///
/// Errors abort immediately. A failed JSON write leaves the binary file in
/// place; nothing is rolled back.
pub fn write_outputs(
    dataset: &Dataset,
    codec: &dyn DatasetCodec,
    config: &SubsetConfig,
) -> Result<OutputPaths, SubsetError> {
    let binary = config.binary_output_path();
    write_binary(dataset, codec, &binary)?;

    let json = config.json_output_path();
    write_json(dataset, codec, &json)?;

    Ok(OutputPaths { binary, json })
}

fn write_binary(
    dataset: &Dataset,
    codec: &dyn DatasetCodec,
    path: &Path,
) -> Result<(), SubsetError> {
    let bytes = codec.encode(dataset)?;
    std::fs::write(path, &bytes).map_err(|source| SubsetError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote binary output");
    Ok(())
}

fn write_json(
    dataset: &Dataset,
    codec: &dyn DatasetCodec,
    path: &Path,
) -> Result<(), SubsetError> {
    let mapping = codec.to_plain_mapping(dataset)?;
    let text = serde_json::to_string_pretty(&mapping)?;
    std::fs::write(path, &text).map_err(|source| SubsetError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote json output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ord_dataset::{GzipProtoCodec, ReactionRecord, load_message};

    fn config_in(dir: &Path) -> SubsetConfig {
        SubsetConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn writes_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Dataset {
            // ord.Reaction { reaction_id: "ord-w" }
            reactions: vec![ReactionRecord::new(b"\x52\x05ord-w".to_vec())],
            ..Dataset::named("written")
        };

        let paths =
            write_outputs(&dataset, &GzipProtoCodec::default(), &config_in(dir.path())).unwrap();

        assert_eq!(load_message(&paths.binary).unwrap(), dataset);
        assert_eq!(load_message(&paths.json).unwrap(), dataset);
    }

    #[test]
    fn empty_dataset_json_is_just_the_name() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_outputs(
            &Dataset::named("empty"),
            &GzipProtoCodec::default(),
            &config_in(dir.path()),
        )
        .unwrap();

        let text = std::fs::read_to_string(paths.json).unwrap();
        assert_eq!(text, "{\n  \"name\": \"empty\"\n}");
    }

    #[test]
    fn missing_output_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("absent"));

        let err =
            write_outputs(&Dataset::named("x"), &GzipProtoCodec::default(), &config).unwrap_err();

        assert!(matches!(err, SubsetError::Output { .. }));
        assert!(!config.json_output_path().exists());
    }
}
