use ord_dataset::{Dataset, DatasetCodec};
use ord_fetch::Fetcher;

use crate::config::{SourceEntry, SubsetConfig};
use crate::error::SubsetError;
use crate::merge::{MergeReport, SourceFailure, SourceOutcome, merge};
use crate::writer::{OutputPaths, write_outputs};

/// Everything a completed build produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: MergeReport,
    pub outputs: OutputPaths,
}

/// Fetch and decode every source, one after another.
///
/// Never fails: a source that cannot be downloaded or decoded becomes a
/// `SourceOutcome::Failed` and the next source is processed.
pub async fn collect_sources(
    config: &SubsetConfig,
    fetcher: &dyn Fetcher,
    codec: &dyn DatasetCodec,
) -> Vec<SourceOutcome> {
    let mut outcomes = Vec::with_capacity(config.sources.len());

    for source in &config.sources {
        tracing::info!(source = %source.name, url = %source.url, "downloading {}", source.name);

        let outcome = match load_source(config, source, fetcher, codec).await {
            Ok(dataset) => SourceOutcome::Loaded {
                source_name: source.name.clone(),
                dataset,
            },
            Err(e) => {
                let failure = SourceFailure::new(&source.name, &e);
                tracing::error!(source = %source.name, error = %e, "{failure}");
                SourceOutcome::Failed(failure)
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Download to `{work_dir}/{name}.pb.gz`, decode, and remove the file.
///
/// The temporary file is only removed once decoding succeeded; on any
/// earlier error it is left where it is.
async fn load_source(
    config: &SubsetConfig,
    source: &SourceEntry,
    fetcher: &dyn Fetcher,
    codec: &dyn DatasetCodec,
) -> Result<Dataset, SubsetError> {
    let temp = config.temp_path(source);

    let written = fetcher.fetch(&source.url, &temp).await?;
    tracing::debug!(source = %source.name, path = %temp.display(), bytes = written, "downloaded");

    let bytes = tokio::fs::read(&temp).await?;
    let dataset = codec.decode(&bytes)?;

    if let Err(e) = tokio::fs::remove_file(&temp).await {
        tracing::warn!(path = %temp.display(), error = %e, "failed to remove temporary file");
    }

    Ok(dataset)
}

/// Build the subset described by `config` and write both outputs.
///
/// Source failures are logged and skipped. Only an invalid configuration or
/// a failure while writing the outputs is returned as an error.
pub async fn run(
    config: &SubsetConfig,
    fetcher: &dyn Fetcher,
    codec: &dyn DatasetCodec,
) -> Result<RunSummary, SubsetError> {
    config.validate()?;

    let outcomes = collect_sources(config, fetcher, codec).await;
    let report = merge(&config.combined_name, outcomes, config.per_source_limit);

    tracing::info!(
        reactions = report.dataset.reactions.len(),
        succeeded = report.succeeded(),
        sources = config.sources.len(),
        "merged sources"
    );

    let outputs = write_outputs(&report.dataset, codec, config)?;

    Ok(RunSummary { report, outputs })
}
