use super::utils::{owner_requirement, validate_approvers_from_state};
use super::CheckResult;
use crate::membership::{is_member_in_config, is_member_in_state};
use planguard_plan::{
    AccessAcl, AccessData, Action, Plan, PriorStateResource, ResourceChange, ResourceType,
};
use planguard_types::Violation;

/// Access-granting resources do not own a group themselves; they grant access
/// to other governed resources. On create, approval is required from an owner
/// of each resource the grant reaches. Without a create action the grant is
/// being removed, and approval comes from the owner group in the grant's own
/// prior-state snapshot.
pub(super) fn run(
    change: &ResourceChange,
    _requester: Option<&PriorStateResource>,
    approvers: &[&PriorStateResource],
    plan: &Plan,
) -> CheckResult {
    if change.change.has_action(Action::Create) {
        return approve_targets(change, approvers, plan);
    }

    CheckResult::from_violations(validate_approvers_from_state(
        &change.address,
        change.change.before.as_ref(),
        approvers,
        plan,
    ))
}

fn approve_targets(
    change: &ResourceChange,
    approvers: &[&PriorStateResource],
    plan: &Plan,
) -> CheckResult {
    let mut violations = Vec::new();

    for target in access_targets(change, plan) {
        let approved = if target.change.after_unknown.owner_user_group_id {
            approvers
                .iter()
                .any(|approver| is_member_in_config(target, Some(approver), plan))
        } else {
            // A target without an ownership requirement needs no approval.
            let Some((_, owner)) = owner_requirement(target.change.after.as_ref()) else {
                continue;
            };
            approvers
                .iter()
                .any(|approver| is_member_in_state(owner, approver, plan))
        };

        if !approved {
            violations.push(Violation::approval_required_from_owner_of(
                &change.address,
                &target.address,
            ));
        }
    }

    CheckResult::from_violations(violations)
}

/// The resource changes this grant gives access to: kafka-topic changes whose
/// project, service, and topic name match the grant's access block and one of
/// its ACL entries.
fn access_targets<'a>(change: &ResourceChange, plan: &'a Plan) -> Vec<&'a ResourceChange> {
    let Some(access) = change
        .change
        .after
        .as_ref()
        .and_then(|after| after.access_data.as_ref())
        .and_then(|data| data.first())
    else {
        return Vec::new();
    };

    let mut targets = Vec::new();
    for acl in &access.acls {
        for candidate in &plan.resource_changes {
            if is_access_target(access, acl, candidate) {
                targets.push(candidate);
            }
        }
    }
    targets
}

fn is_access_target(access: &AccessData, acl: &AccessAcl, candidate: &ResourceChange) -> bool {
    if candidate.resource_type != ResourceType::KafkaTopic {
        return false;
    }
    let Some(after) = candidate.change.after.as_ref() else {
        return false;
    };

    // A field the candidate does not carry is not a mismatch.
    if after.project.as_deref().is_some_and(|p| p != access.project) {
        return false;
    }
    if after
        .service_name
        .as_deref()
        .is_some_and(|s| s != access.service_name)
    {
        return false;
    }
    if after
        .topic_name
        .as_deref()
        .is_some_and(|t| t != acl.resource_name)
    {
        return false;
    }
    true
}
