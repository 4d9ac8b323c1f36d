//! One extraction run, from configuration to result file.
//!
//! Responsibilities:
//! - Build the validated configuration from the environment and CLI overrides.
//! - Check the output root, connect, run the pipeline and write the result set.
//!
//! Invariants:
//! - Nothing reaches Splunk unless the configuration is valid and the output
//!   root can be created.
//!
//! Does NOT handle:
//! - `.env` loading or logging setup (done in `main` before this runs).
//! - Exit code selection (see `error`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use splunk_client::SplunkClient;
use splunk_config::{Config, ConfigError, ConfigLoader};
use tracing::{info, warn};

use crate::args::Cli;
use crate::output::{OutputWriter, RunTimestamp};
use crate::pipeline::{CatalogSource, ExtractionPipeline};

/// Apply CLI flags on top of whatever the loader already collected.
fn apply_overrides(mut loader: ConfigLoader, cli: &Cli) -> ConfigLoader {
    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    loader
}

/// Merge `SPLUNK_*` variables with the CLI overrides and validate the result.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let loader = ConfigLoader::new().from_env()?;
    apply_overrides(loader, cli).build()
}

/// Execute one run against Splunk and return the path of the written result file.
pub async fn run(cli: &Cli) -> Result<PathBuf> {
    let config = load_config(cli).context("Failed to load configuration");
    run_with(cli, config, |config| {
        SplunkClient::builder()
            .from_config(config)
            .build()
            .context("Failed to build Splunk client")
    })
    .await
}

/// Execute one run against whatever catalog `connect` produces.
///
/// `connect` is only called once the configuration is valid and the output
/// root exists.
pub async fn run_with<S, F>(cli: &Cli, config: Result<Config>, connect: F) -> Result<PathBuf>
where
    S: CatalogSource,
    F: FnOnce(&Config) -> Result<S>,
{
    let config = config?;
    info!(
        url = %config.connection.base_url,
        timeout_secs = config.connection.timeout.as_secs(),
        skip_verify = config.connection.skip_verify,
        "Configuration loaded"
    );

    let writer = OutputWriter::new(&cli.output_dir);
    writer.prepare().context("Output directory is not usable")?;

    let source = connect(&config)?;
    let report = ExtractionPipeline::new(&source).run().await?;

    if report.result_set.is_empty() {
        warn!("No sourcetypes were extracted; writing an empty result set");
    }
    if !report.failures.is_empty() {
        let skipped: Vec<String> = report
            .failures
            .iter()
            .map(|f| match f.error.status() {
                Some(status) => format!("{} ({})", f.sourcetype, status),
                None => f.sourcetype.clone(),
            })
            .collect();
        warn!(
            count = skipped.len(),
            sourcetypes = %skipped.join(", "),
            "Some sourcetypes were skipped"
        );
    }

    let path = writer
        .write(&report.result_set, RunTimestamp::now())
        .context("Failed to write results")?;

    if cli.print {
        print!("{}", OutputWriter::render(&report.result_set)?);
    }

    info!(
        indexes = report.indexes.len(),
        sourcetypes = report.result_set.len(),
        skipped = report.failures.len(),
        path = %path.display(),
        "Run complete"
    );

    Ok(path)
}
