use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::SubsetError;

pub const COMBINED_NAME: &str = "Mixed Buchwald-Hartwig Subset for Interview";
pub const OUTPUT_STEM: &str = "ord_challenge_subset";
pub const PER_SOURCE_LIMIT: usize = 10;

/// A named, remotely hosted `.pb.gz` dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Human-readable name; also names the temporary download file.
    pub name: String,
    pub url: String,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The public ORD datasets sampled by default, in processing order.
pub fn default_sources() -> Vec<SourceEntry> {
    vec![
        SourceEntry::new(
            "AstraZeneca_ELN",
            "https://github.com/open-reaction-database/ord-data/raw/main/data/00/ord_dataset-00005539a1e04c809a9a78647bea649c.pb.gz",
        ),
        SourceEntry::new(
            "Merck_HTE",
            "https://github.com/open-reaction-database/ord-data/raw/main/data/cb/ord_dataset-cbcc4048add7468e850b6ec42549c70d.pb.gz",
        ),
    ]
}

/// Configuration for one subset build.
#[derive(Debug, Clone)]
pub struct SubsetConfig {
    /// Name given to the combined dataset.
    pub combined_name: String,
    /// Sources, processed strictly in this order.
    pub sources: Vec<SourceEntry>,
    /// Maximum reactions taken from the front of each source.
    pub per_source_limit: usize,
    /// Where temporary `{name}.pb.gz` downloads are placed.
    pub work_dir: PathBuf,
    /// Where the two output files are written. Must already exist.
    pub output_dir: PathBuf,
    /// Output file stem; `.pb.gz` and `.json` are appended.
    pub output_stem: String,
}

impl Default for SubsetConfig {
    fn default() -> Self {
        Self {
            combined_name: COMBINED_NAME.to_string(),
            sources: default_sources(),
            per_source_limit: PER_SOURCE_LIMIT,
            work_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            output_stem: OUTPUT_STEM.to_string(),
        }
    }
}

impl SubsetConfig {
    pub fn temp_path(&self, source: &SourceEntry) -> PathBuf {
        self.work_dir.join(format!("{}.pb.gz", source.name))
    }

    pub fn binary_output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pb.gz", self.output_stem))
    }

    pub fn json_output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.output_stem))
    }

    /// Source names become file names, so they must be unique, non-empty,
    /// and free of path separators.
    pub fn validate(&self) -> Result<(), SubsetError> {
        if self.per_source_limit == 0 {
            return Err(SubsetError::Config(
                "per_source_limit must be at least 1".to_string(),
            ));
        }
        if self.output_stem.is_empty() {
            return Err(SubsetError::Config("output_stem is empty".to_string()));
        }

        let mut names = HashSet::new();
        for source in &self.sources {
            if source.name.is_empty() || source.name.contains(['/', '\\']) {
                return Err(SubsetError::Config(format!(
                    "invalid source name: '{}'",
                    source.name
                )));
            }
            if !names.insert(source.name.as_str()) {
                return Err(SubsetError::Config(format!(
                    "duplicate source name: {}",
                    source.name
                )));
            }
        }
        Ok(())
    }
}
