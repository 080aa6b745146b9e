//! Dual-mode group membership resolution.
//!
//! A Terraform plan exposes two time slices: the pre-apply state (real ids,
//! matched by value) and the as-written configuration graph (symbolic
//! addresses, matched by reference). Which one answers "is user U a member of
//! group G" depends on whether the group id is already knowable: a group
//! created in the same plan has no id until apply, so membership can only be
//! established by following configuration references.

use planguard_plan::{Expression, Plan, PriorStateResource, ResourceChange, ResourceType};

/// State-based membership: prior state contains a group-membership resource
/// linking the owner group to the user's internal id.
pub fn is_member_in_state(owner_group_id: &str, user: &PriorStateResource, plan: &Plan) -> bool {
    plan.prior_resources().iter().any(|resource| {
        resource.resource_type == ResourceType::UserGroupMember
            && resource.values.group_id.as_deref() == Some(owner_group_id)
            && resource.values.user_id.as_deref() == Some(user.values.internal_user_id.as_str())
    })
}

/// Configuration-based membership: used only when the owner group id is
/// unknown until apply.
///
/// Resolves the owner group's configuration address through the change's
/// owner-group expression, the user's configuration address through the user
/// resource's internal-user-id expression, then looks for a configuration
/// group-membership resource referencing both. Any missing link is "not a
/// member", not an error.
pub fn is_member_in_config(
    change: &ResourceChange,
    user: Option<&PriorStateResource>,
    plan: &Plan,
) -> bool {
    let Some(user) = user else {
        return false;
    };
    let Some(owner_address) = owner_address_from_config(&change.address, plan) else {
        return false;
    };
    let Some(user_address) = user_address_from_config(&user.address, plan) else {
        return false;
    };

    plan.config_resources().iter().any(|resource| {
        resource.resource_type == ResourceType::UserGroupMember
            && referenced(resource.expressions.group_id.as_ref()) == Some(owner_address)
            && referenced(resource.expressions.user_id.as_ref()) == Some(user_address)
    })
}

fn referenced(expression: Option<&Expression>) -> Option<&str> {
    expression?.referenced_address()
}

/// Owner group address from the planned configuration of the given resource.
fn owner_address_from_config<'a>(address: &str, plan: &'a Plan) -> Option<&'a str> {
    referenced(
        plan.config_resource(address)?
            .expressions
            .owner_user_group_id
            .as_ref(),
    )
}

/// User address from the planned configuration of the given identity resource.
fn user_address_from_config<'a>(address: &str, plan: &'a Plan) -> Option<&'a str> {
    referenced(
        plan.config_resource(address)?
            .expressions
            .internal_user_id
            .as_ref(),
    )
}
