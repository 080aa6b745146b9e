use crate::membership::is_member_in_state;
use planguard_plan::{Plan, PriorStateResource, ResourceValues};
use planguard_types::Violation;

/// The ownership requirement a snapshot imposes, if any.
///
/// An absent snapshot, an absent owner-group field, and an empty owner-group
/// string are all "no requirement". The empty/absent equivalence is policy;
/// keep it in this one place.
pub(crate) fn owner_requirement(
    snapshot: Option<&ResourceValues>,
) -> Option<(&ResourceValues, &str)> {
    let snapshot = snapshot?;
    let owner = snapshot.owner_user_group_id.as_deref()?;
    if owner.is_empty() {
        return None;
    }
    Some((snapshot, owner))
}

/// The requester must be a state-member of the snapshot's owner group.
pub(crate) fn validate_requester_from_state(
    address: &str,
    snapshot: Option<&ResourceValues>,
    requester: Option<&PriorStateResource>,
    plan: &Plan,
) -> Vec<Violation> {
    let Some((snapshot, owner)) = owner_requirement(snapshot) else {
        return Vec::new();
    };

    if requester.is_some_and(|user| is_member_in_state(owner, user, plan)) {
        return Vec::new();
    }
    vec![Violation::requester_not_member(
        address,
        snapshot.tag.as_deref(),
    )]
}

/// At least one approver must be a state-member of the snapshot's owner group.
pub(crate) fn validate_approvers_from_state(
    address: &str,
    snapshot: Option<&ResourceValues>,
    approvers: &[&PriorStateResource],
    plan: &Plan,
) -> Vec<Violation> {
    let Some((snapshot, owner)) = owner_requirement(snapshot) else {
        return Vec::new();
    };

    if approvers
        .iter()
        .any(|approver| is_member_in_state(owner, approver, plan))
    {
        return Vec::new();
    }
    vec![Violation::approval_required(address, snapshot.tag.as_deref())]
}
