use std::process::ExitCode;

use ord_dataset::GzipProtoCodec;
use ord_fetch::FetchConfig;
use ord_fetch_http::HttpFetcher;
use ord_subset::{SubsetConfig, SubsetError, run};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match build().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "subset build failed");
            ExitCode::FAILURE
        }
    }
}

async fn build() -> Result<(), SubsetError> {
    let config = SubsetConfig::default();
    let fetcher = HttpFetcher::new(FetchConfig::default())?;
    let codec = GzipProtoCodec::default();

    let summary = run(&config, &fetcher, &codec).await?;

    tracing::info!(
        reactions = summary.report.dataset.reactions.len(),
        "'{}' and '{}' are ready",
        summary.outputs.binary.display(),
        summary.outputs.json.display()
    );
    Ok(())
}
