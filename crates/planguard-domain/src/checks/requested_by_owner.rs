use super::utils::validate_requester_from_state;
use super::CheckResult;
use crate::membership::is_member_in_config;
use planguard_plan::{Action, Plan, PriorStateResource, ResourceChange};
use planguard_types::Violation;

/// The requester must be a member of the owner group in every snapshot
/// relevant to the attempted action: after for create, before and after for
/// update, before for delete.
pub(super) fn run(
    change: &ResourceChange,
    requester: Option<&PriorStateResource>,
    _approvers: &[&PriorStateResource],
    plan: &Plan,
) -> CheckResult {
    // An owner group created in the same plan has no id until apply, so it
    // cannot appear in prior state. Membership is resolved from the
    // configuration graph instead, and that replaces the per-action state
    // rules entirely.
    if change.change.after_unknown.owner_user_group_id {
        let mut violations = Vec::new();
        if !is_member_in_config(change, requester, plan) {
            let tags = change.change.after.as_ref().and_then(|a| a.tag.as_deref());
            violations.push(Violation::requester_not_member(&change.address, tags));
        }
        return CheckResult::from_violations(violations);
    }

    let mut violations = Vec::new();
    if change.change.has_action(Action::Create) {
        violations.extend(validate_requester_from_state(
            &change.address,
            change.change.after.as_ref(),
            requester,
            plan,
        ));
    }
    if change.change.has_action(Action::Update) {
        // Moving a resource between owner groups needs the requester in both
        // the old and the new group.
        violations.extend(validate_requester_from_state(
            &change.address,
            change.change.before.as_ref(),
            requester,
            plan,
        ));
        violations.extend(validate_requester_from_state(
            &change.address,
            change.change.after.as_ref(),
            requester,
            plan,
        ));
    }
    if change.change.has_action(Action::Delete) {
        violations.extend(validate_requester_from_state(
            &change.address,
            change.change.before.as_ref(),
            requester,
            plan,
        ));
    }

    CheckResult::from_violations(violations)
}
