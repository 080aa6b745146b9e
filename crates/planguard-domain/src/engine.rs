use crate::checks;
use crate::identity;
use planguard_plan::{Plan, PriorStateResource, ResourceChange};
use planguard_types::{EvalResult, Violation};
use std::collections::BTreeMap;

/// Evaluate every resource change in the plan against the governance policy.
///
/// The requester and each approver identifier are resolved against
/// prior-state external identities once; the registered checks for each
/// change then run unconditionally and their violations are folded into a
/// single pass/fail result.
pub fn evaluate(plan: &Plan, requester_id: &str, approver_ids: &[String]) -> EvalResult {
    let requester = identity::find_identity(requester_id, plan);
    let approvers = identity::find_approvers(approver_ids, requester_id, plan);

    let mut violations = Vec::new();
    for change in &plan.resource_changes {
        violations.extend(evaluate_change(change, requester, &approvers, plan));
    }
    EvalResult::from_violations(violations)
}

fn evaluate_change(
    change: &ResourceChange,
    requester: Option<&PriorStateResource>,
    approvers: &[&PriorStateResource],
    plan: &Plan,
) -> Vec<Violation> {
    let mut collected = Vec::new();
    for check in checks::checks_for(change.resource_type) {
        collected.extend(check(change, requester, approvers, plan).violations);
    }

    // At most one violation per (resource name, message) pair. Last write
    // wins; the map's key order keeps the output deterministic.
    let mut deduped: BTreeMap<(String, String), Violation> = BTreeMap::new();
    for violation in collected {
        deduped.insert(
            (change.name.clone(), violation.message.clone()),
            violation,
        );
    }
    deduped.into_values().collect()
}
