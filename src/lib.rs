#![deny(missing_docs)]
//! <fullname>Log group cleaner</fullname>
//!
//! Lambda function that runs on a schedule and deletes CloudWatch
//! log groups left behind by Lambda functions and REST APIs
//! that don't exist anymore.
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::Value;

mod account;
pub use account::{Account, AwsAccount, Removal};

mod apigateway;

mod cloudwatch_logs;

mod config;
pub use config::{Config, DEFAULT_API_EXECUTION_LOG_PREFIX, DEFAULT_FUNCTION_LOG_PREFIX};

mod error;
pub use error::RuntimeError;

mod lambda;

/// `pagination` walks cursor-paginated collections
pub mod pagination;
pub use pagination::Listing;

/// `reconcile` finds and deletes orphaned log groups
pub mod reconcile;
use reconcile::{api_candidates, classify, function_candidates, sweep, Sweep, SweepMode};

#[cfg(test)]
mod test_util;

/// Fixed response returned to the invoker.
/// It carries no information about the cleanup, the logs do.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgment {
    /// Always 200
    pub status_code: u16,
    /// JSON encoded message
    pub body: String,
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Acknowledgment {
            status_code: 200,
            body: r#"{"message":"hello world"}"#.into(),
        }
    }
}

/// What a cleanup run did for each kind of log group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Sweep of the function log groups
    pub functions: Sweep,
    /// Sweep of the REST API execution log groups
    pub apis: Sweep,
}

fn sweep_mode(config: &Config, live: &Listing<String>) -> SweepMode {
    if config.dry_run {
        SweepMode::DryRun
    } else if !live.is_complete() && !config.delete_on_partial_inventory {
        SweepMode::HeldBack
    } else {
        SweepMode::Delete
    }
}

/// Delete the log groups of functions and REST APIs that don't exist anymore.
///
/// Incomplete listings are used as they are. An incomplete log group
/// listing can only produce fewer candidates. An incomplete function
/// or REST API listing would make live resources look orphaned, so the
/// candidates of that kind are logged but kept unless
/// `delete_on_partial_inventory` is set.
#[tracing::instrument(skip_all)]
pub async fn run_cleanup<A: Account>(account: &A, config: &Config) -> Report {
    let log_groups = account.list_log_groups().await;
    if !log_groups.is_complete() {
        tracing::warn!(
            "log group listing is incomplete, continuing with {} log group(s)",
            log_groups.items().len()
        );
    }
    let log_groups = log_groups.into_items();
    tracing::debug!(?log_groups, "log groups");

    let live_functions = account.list_functions().await;
    let function_logs = classify(&log_groups, &config.function_log_prefix);
    let candidates = function_candidates(
        &function_logs,
        live_functions.items(),
        &config.function_log_prefix,
    );
    let functions = sweep(
        account,
        "function",
        candidates,
        sweep_mode(config, &live_functions),
    )
    .await;

    let live_apis = account.list_rest_apis().await;
    let api_logs = classify(&log_groups, &config.api_execution_log_prefix);
    let candidates = api_candidates(&api_logs, live_apis.items());
    let apis = sweep(account, "rest api", candidates, sweep_mode(config, &live_apis)).await;

    Report { functions, apis }
}

/// `handle_cleanup` is the Lambda function entry point
/// that receives the scheduled events
#[tracing::instrument(skip(account, config, event), fields(request_id = %event.context.request_id))]
pub async fn handle_cleanup<A: Account>(
    account: &A,
    config: &Config,
    event: LambdaEvent<Value>,
) -> Result<Acknowledgment, RuntimeError> {
    tracing::info!(payload = %event.payload, "received event");

    let report = run_cleanup(account, config).await;
    tracing::info!(
        function_candidates = report.functions.candidates.len(),
        function_deleted = report.functions.deleted.len(),
        function_failed = report.functions.failed.len(),
        api_candidates = report.apis.candidates.len(),
        api_deleted = report.apis.deleted.len(),
        api_failed = report.apis.failed.len(),
        "cleanup finished"
    );

    Ok(Acknowledgment::default())
}
