//! System check runner.
//!
//! Orchestrates one evaluation pass: fan out every predicate concurrently,
//! then walk the results in input order and apply each check's effects.
//!
//! Evaluation latency is bounded by the slowest single check rather than the
//! sum of all checks, and additionally by a per-check deadline: a predicate
//! that misses its deadline is resolved with that check's safe default
//! verdict instead of stalling the pass.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, info, warn};

use crate::executor::EffectExecutor;
use crate::traits::SystemCheck;

/// Runs a batch of system checks and applies their side effects.
///
/// Predicates run concurrently; no check may depend on another check's
/// result within the same pass. Effects are applied strictly in the order
/// the checks appear in `checks`, even though evaluation was unordered.
///
/// Returns one boolean per check, index-aligned with the input. The ordering
/// is semantically meaningful: it is how callers correlate a result back to
/// a check and to the order side effects were applied.
pub async fn run_system_checks(
    checks: &[Arc<dyn SystemCheck>],
    executor: &EffectExecutor,
) -> Vec<bool> {
    info!("Running {} system checks", checks.len());

    // Fan-out: evaluate all predicates concurrently, each under its own
    // deadline.
    let results = join_all(checks.iter().map(|check| async move {
        match tokio::time::timeout(check.timeout(), check.run_check()).await {
            Ok(passed) => passed,
            Err(_) => {
                let verdict = check.verdict_on_timeout();
                warn!(
                    "Check '{}' missed its {:?} deadline, assuming {}",
                    check.id(),
                    check.timeout(),
                    if verdict { "pass" } else { "fail" }
                );
                verdict
            }
        }
    }))
    .await;

    // Fan-in: apply side effects sequentially, in input order.
    for (check, passed) in checks.iter().zip(results.iter()) {
        let effects = if *passed {
            debug!("Check '{}' passed", check.id());
            check.on_success().await
        } else {
            debug!("Check '{}' failed", check.id());
            check.on_fail().await
        };

        executor.apply(effects).await;
    }

    info!(
        "System checks complete: {}/{} passed",
        results.iter().filter(|passed| **passed).count(),
        results.len()
    );

    results
}
