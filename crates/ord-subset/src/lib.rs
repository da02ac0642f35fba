mod config;
mod error;
mod merge;
mod pipeline;
mod writer;

pub use config::{
    COMBINED_NAME, OUTPUT_STEM, PER_SOURCE_LIMIT, SourceEntry, SubsetConfig, default_sources,
};
pub use error::SubsetError;
pub use merge::{MergeReport, SourceFailure, SourceOutcome, SourceReport, SourceStatus, merge};
pub use pipeline::{RunSummary, collect_sources, run};
pub use writer::{OutputPaths, write_outputs};
