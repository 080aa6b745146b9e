use super::utils::validate_approvers_from_state;
use super::CheckResult;
use crate::membership::is_member_in_config;
use planguard_plan::{Action, Plan, PriorStateResource, ResourceChange};
use planguard_types::Violation;

/// At least one approver must be a member of the owner group in every
/// snapshot relevant to the attempted action. One matching approver per
/// snapshot is enough.
pub(super) fn run(
    change: &ResourceChange,
    _requester: Option<&PriorStateResource>,
    approvers: &[&PriorStateResource],
    plan: &Plan,
) -> CheckResult {
    // Same split as the requester check: an unknown owner group only exists
    // in the configuration graph, and that path replaces the state rules.
    if change.change.after_unknown.owner_user_group_id {
        let mut violations = Vec::new();
        let approved = approvers
            .iter()
            .any(|approver| is_member_in_config(change, Some(approver), plan));
        if !approved {
            let tags = change.change.after.as_ref().and_then(|a| a.tag.as_deref());
            violations.push(Violation::approval_required(&change.address, tags));
        }
        return CheckResult::from_violations(violations);
    }

    let mut violations = Vec::new();
    if change.change.has_action(Action::Create) {
        violations.extend(validate_approvers_from_state(
            &change.address,
            change.change.after.as_ref(),
            approvers,
            plan,
        ));
    }
    if change.change.has_action(Action::Update) {
        // Changing the owner needs approvals from both the old and the new
        // group; with an unchanged owner the second pass is a no-op.
        violations.extend(validate_approvers_from_state(
            &change.address,
            change.change.before.as_ref(),
            approvers,
            plan,
        ));
        violations.extend(validate_approvers_from_state(
            &change.address,
            change.change.after.as_ref(),
            approvers,
            plan,
        ));
    }
    if change.change.has_action(Action::Delete) {
        violations.extend(validate_approvers_from_state(
            &change.address,
            change.change.before.as_ref(),
            approvers,
            plan,
        ));
    }

    CheckResult::from_violations(violations)
}
