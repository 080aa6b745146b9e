//! Resolution of user-supplied identifiers against prior-state external
//! identities.

use planguard_plan::{Plan, PriorStateResource, ResourceType};

/// Find the prior-state external identity whose external user id equals the
/// given value. Returns the first match.
pub fn find_identity<'a>(user_id: &str, plan: &'a Plan) -> Option<&'a PriorStateResource> {
    plan.prior_resources().iter().find(|resource| {
        resource.resource_type == ResourceType::ExternalIdentity
            && resource.values.external_user_id == user_id
    })
}

/// Resolve each approver identifier to its external identity.
///
/// Identifiers that do not resolve are silently dropped, and the requester is
/// excluded: a requester never counts as their own approver, even if listed.
/// Input order is preserved; duplicate identifiers simply resolve twice.
pub fn find_approvers<'a>(
    approver_ids: &[String],
    requester_id: &str,
    plan: &'a Plan,
) -> Vec<&'a PriorStateResource> {
    approver_ids
        .iter()
        .filter(|id| id.as_str() != requester_id)
        .filter_map(|id| find_identity(id, plan))
        .collect()
}
