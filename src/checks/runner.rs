use tracing::{debug, info};

use crate::lib::fs::RepoProbe;

use super::{CheckOutcome, CheckSpec};

/// Evaluate each row in order, awaiting one check at a time.
///
/// Always yields exactly one outcome per row.
pub async fn run_checks<P>(probe: &P, checklist: &[CheckSpec]) -> Vec<CheckOutcome>
where
    P: RepoProbe + Sync,
{
    let mut outcomes = Vec::with_capacity(checklist.len());
    let mut current_category: Option<&str> = None;

    for spec in checklist {
        if current_category != Some(spec.category) {
            info!(
                target: "rsr_audit::checks",
                category = spec.category,
                "Checking {}...",
                spec.category
            );
            current_category = Some(spec.category);
        }

        let passed = spec.predicate.evaluate(probe).await;
        debug!(
            target: "rsr_audit::checks",
            category = spec.category,
            check = spec.name,
            passed,
            "Evaluated check"
        );
        outcomes.push(CheckOutcome::from_spec(spec, passed));
    }

    outcomes
}
