use std::collections::HashSet;

use crate::account::{Account, Removal};

/// Log group names containing `marker`, in their original order.
///
/// The marker may appear anywhere in the name, not only at the start.
pub fn classify(names: &[String], marker: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.contains(marker))
        .cloned()
        .collect()
}

/// Function log groups whose name is not `prefix + function` for any
/// live function. Names are compared exactly.
pub fn function_candidates(
    classified: &[String],
    live_functions: &[String],
    prefix: &str,
) -> Vec<String> {
    let expected: HashSet<String> = live_functions
        .iter()
        .map(|function| format!("{prefix}{function}"))
        .collect();

    unique(classified)
        .filter(|name| !expected.contains(*name))
        .cloned()
        .collect()
}

/// API execution log groups whose name contains none of the live
/// REST API identifiers.
pub fn api_candidates(classified: &[String], live_api_ids: &[String]) -> Vec<String> {
    unique(classified)
        .filter(|name| !live_api_ids.iter().any(|id| name.contains(id.as_str())))
        .cloned()
        .collect()
}

// First occurrence of every name.
fn unique(names: &[String]) -> impl Iterator<Item = &String> {
    let mut seen = HashSet::new();
    names.iter().filter(move |&name| seen.insert(name.as_str()))
}

/// How a sweep treats its candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepMode {
    /// Delete every candidate
    Delete,
    /// Only log the candidates
    DryRun,
    /// Keep every candidate because the live resource listing is incomplete
    HeldBack,
}

/// What a sweep did with its candidates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    /// Log groups without a live resource
    pub candidates: Vec<String>,
    /// Log groups deleted by this sweep
    pub deleted: Vec<String>,
    /// Log groups that were gone when the delete request arrived
    pub already_gone: Vec<String>,
    /// Log groups whose delete request failed
    pub failed: Vec<String>,
    /// Whether the deletes were skipped
    pub skipped: bool,
}

/// Delete every candidate, one request each.
/// A failed delete is logged and the sweep moves on to the next candidate.
#[tracing::instrument(skip(account, candidates), fields(candidates = candidates.len()))]
pub async fn sweep<A: Account>(
    account: &A,
    kind: &str,
    candidates: Vec<String>,
    mode: SweepMode,
) -> Sweep {
    tracing::info!(?candidates, "orphaned {kind} log groups");

    let mut sweep = Sweep {
        candidates,
        ..Default::default()
    };

    match mode {
        SweepMode::Delete => {}
        SweepMode::DryRun => {
            tracing::info!("dry run, keeping {} log group(s)", sweep.candidates.len());
            sweep.skipped = true;
            return sweep;
        }
        SweepMode::HeldBack => {
            tracing::warn!(
                "{kind} listing is incomplete, keeping {} log group(s)",
                sweep.candidates.len()
            );
            sweep.skipped = true;
            return sweep;
        }
    }

    for name in &sweep.candidates {
        match account.delete_log_group(name).await {
            Ok(Removal::Deleted) => {
                tracing::info!(log_group = %name, "deleted log group");
                sweep.deleted.push(name.clone());
            }
            Ok(Removal::AlreadyGone) => {
                tracing::warn!(log_group = %name, "log group was already deleted");
                sweep.already_gone.push(name.clone());
            }
            Err(err) => {
                tracing::error!(log_group = %name, error = %err, "failed to delete log group");
                sweep.failed.push(name.clone());
            }
        }
    }

    sweep
}
