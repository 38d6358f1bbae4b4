//! Command line front end
//!
//! Runs one bulk operation over a JSON batch file against the configured
//! backend, optionally retrying the failed subset a few times.

use crate::config::Config;
use crate::core::batch::{BatchExecutor, CancellationToken, ItemDescriptor, Outcome};
use crate::core::observers::TracingObserver;
use crate::core::operations::{HttpOperation, OperationKind};
use crate::core::traits::RemoteOperation;
use crate::utils::error::{BulkError, Result};
use crate::utils::logging::{bootstrap_dispatch, init_tracing};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument::WithSubscriber;
use tracing::{info, warn};

/// Run a bulk operation over a batch of items, one at a time
#[derive(Debug, Parser)]
#[command(name = "bulkrun", version, about)]
pub struct Cli {
    /// Operation to run: stats, type, keywords or screenshot
    #[arg(short, long)]
    pub kind: OperationKind,

    /// JSON file holding an array of items (`{"id": ..., "label": ..., "attributes": {...}}`)
    #[arg(short, long)]
    pub batch: PathBuf,

    /// YAML configuration file; `BULKRUN_*` variables override it
    #[arg(short, long, env = "BULKRUN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the pause between items, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Retry rounds over the failed subset
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Read a batch from a JSON array file
pub async fn load_batch(path: &Path) -> Result<Vec<ItemDescriptor>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        BulkError::Config(format!("Failed to read batch file {:?}: {}", path, e))
    })?;
    let items: Vec<ItemDescriptor> = serde_json::from_str(&content).map_err(|e| {
        BulkError::Validation(format!("Batch file {:?} is not a JSON item array: {}", path, e))
    })?;
    Ok(items)
}

/// Combine file, environment and command line settings
pub async fn resolve_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    let mut config = base.merge(Config::from_env()?);

    if let Some(delay_ms) = cli.delay_ms {
        config.executor.inter_item_delay_ms = delay_ms;
    }
    if cli.json_logs {
        config.logging.json = true;
    }

    config.validate()?;
    Ok(config)
}

/// Run the command; `Ok(true)` when every item ended up succeeding
pub async fn run(cli: Cli) -> Result<bool> {
    // Config loading logs through a default subscriber until the real one is known
    let config = resolve_config(&cli)
        .with_subscriber(bootstrap_dispatch(cli.json_logs))
        .await?;
    init_tracing(&config.logging)?;

    let batch = load_batch(&cli.batch).await?;
    let operation = HttpOperation::new(cli.kind, &config.remote)?;
    info!(
        kind = %cli.kind,
        endpoint = operation.endpoint(),
        items = batch.len(),
        "Starting bulk operation"
    );

    let mut executor = BatchExecutor::from_config(operation, &config.executor)
        .with_observer(Arc::new(TracingObserver::new(cli.kind.as_str())));

    let token = CancellationToken::new();
    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping after the current item");
            interrupt.cancel();
        }
    });

    let Some(outcome) = executor.run_cancellable(batch, &token).await else {
        warn!("Batch file contains no items");
        return Ok(true);
    };
    let outcome = retry_rounds(&mut executor, outcome, cli.retries, &token).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(!outcome.has_failures() && !outcome.cancelled)
}

/// Retry the failed subset up to `max_rounds` times
///
/// Stops as soon as nothing failed or `token` has been cancelled, even when
/// the cancel landed too late to mark the last run as cancelled.
pub async fn retry_rounds<O: RemoteOperation>(
    executor: &mut BatchExecutor<O>,
    mut outcome: Outcome,
    max_rounds: u32,
    token: &CancellationToken,
) -> Outcome {
    let mut round = 0;
    while should_retry(&outcome, round, max_rounds, token) {
        round += 1;
        info!(round, failed = outcome.failed, "Retrying failed items");
        match executor.retry_failures_cancellable(token).await {
            Some(next) => outcome = next,
            None => break,
        }
    }
    outcome
}

fn should_retry(
    outcome: &Outcome,
    round: u32,
    max_rounds: u32,
    token: &CancellationToken,
) -> bool {
    outcome.has_failures() && !outcome.cancelled && !token.is_cancelled() && round < max_rounds
}
