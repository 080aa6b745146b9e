//! Hand-rolled plan builders shared by the domain tests.

use planguard_plan::{
    AccessAcl, AccessData, Action, ConfigurationResource, Expression, Plan, PriorStateResource,
    PriorStateResourceValues, ResourceChange, ResourceType, ResourceValues,
};

pub(crate) struct PlanBuilder {
    plan: Plan,
}

impl PlanBuilder {
    pub(crate) fn new() -> Self {
        Self {
            plan: Plan::default(),
        }
    }

    /// Prior-state external identity, addressed like a data source.
    pub(crate) fn identity(mut self, external_id: &str, internal_id: &str) -> Self {
        self.plan
            .prior_state
            .values
            .root_module
            .resources
            .push(PriorStateResource {
                resource_type: ResourceType::ExternalIdentity,
                name: external_id.to_string(),
                address: format!("data.aiven_external_identity.{external_id}"),
                values: PriorStateResourceValues {
                    internal_user_id: internal_id.to_string(),
                    external_user_id: external_id.to_string(),
                    ..Default::default()
                },
            });
        self
    }

    /// Prior-state group membership linking a group id to an internal user id.
    pub(crate) fn state_membership(mut self, group_id: &str, user_id: &str) -> Self {
        self.plan
            .prior_state
            .values
            .root_module
            .resources
            .push(PriorStateResource {
                resource_type: ResourceType::UserGroupMember,
                name: format!("{group_id}_{user_id}"),
                address: format!("aiven_organization_user_group_member.{group_id}_{user_id}"),
                values: PriorStateResourceValues {
                    group_id: Some(group_id.to_string()),
                    user_id: Some(user_id.to_string()),
                    ..Default::default()
                },
            });
        self
    }

    pub(crate) fn change(mut self, change: ResourceChange) -> Self {
        self.plan.resource_changes.push(change);
        self
    }

    /// Configuration resource whose owner-group attribute references the
    /// given group address.
    pub(crate) fn config_topic_owner(mut self, address: &str, owner_address: &str) -> Self {
        let mut resource = config_resource(ResourceType::KafkaTopic, address);
        resource.expressions.owner_user_group_id = Some(reference_to(owner_address));
        self.plan.configuration.root_module.resources.push(resource);
        self
    }

    /// Configuration identity whose internal-user-id attribute references the
    /// given user address.
    pub(crate) fn config_identity(mut self, address: &str, user_address: &str) -> Self {
        let mut resource = config_resource(ResourceType::ExternalIdentity, address);
        resource.expressions.internal_user_id = Some(reference_to(user_address));
        self.plan.configuration.root_module.resources.push(resource);
        self
    }

    /// Configuration group membership wiring a group address to a user
    /// address.
    pub(crate) fn config_membership(mut self, group_address: &str, user_address: &str) -> Self {
        let member = user_address.rsplit('.').next().unwrap_or(user_address);
        let mut resource = config_resource(
            ResourceType::UserGroupMember,
            &format!("aiven_organization_user_group_member.{member}"),
        );
        resource.expressions.group_id = Some(reference_to(group_address));
        resource.expressions.user_id = Some(reference_to(user_address));
        self.plan.configuration.root_module.resources.push(resource);
        self
    }

    pub(crate) fn build(self) -> Plan {
        self.plan
    }
}

fn config_resource(resource_type: ResourceType, address: &str) -> ConfigurationResource {
    ConfigurationResource {
        resource_type,
        name: address.rsplit('.').next().unwrap_or(address).to_string(),
        address: address.to_string(),
        ..Default::default()
    }
}

/// An expression whose second reference entry names the given address, the
/// way Terraform emits attribute-plus-resource reference pairs.
fn reference_to(address: &str) -> Expression {
    Expression {
        references: vec![format!("{address}.id"), address.to_string()],
    }
}

/// Snapshot owned by the given group.
pub(crate) fn owned(owner_group_id: &str) -> ResourceValues {
    ResourceValues {
        owner_user_group_id: Some(owner_group_id.to_string()),
        ..Default::default()
    }
}

pub(crate) fn topic_change(
    name: &str,
    actions: Vec<Action>,
    before: Option<ResourceValues>,
    after: Option<ResourceValues>,
) -> ResourceChange {
    ResourceChange {
        resource_type: ResourceType::KafkaTopic,
        name: name.to_string(),
        address: format!("aiven_kafka_topic.{name}"),
        change: planguard_plan::Change {
            actions,
            before,
            after,
            ..Default::default()
        },
    }
}

/// Access grant creating ACL entries for the named topics.
pub(crate) fn grant_change(
    name: &str,
    project: &str,
    service_name: &str,
    topic_names: &[&str],
) -> ResourceChange {
    let access = AccessData {
        project: project.to_string(),
        service_name: service_name.to_string(),
        acls: topic_names
            .iter()
            .map(|topic| AccessAcl {
                resource_name: topic.to_string(),
            })
            .collect(),
    };
    ResourceChange {
        resource_type: ResourceType::GovernanceAccess,
        name: name.to_string(),
        address: format!("aiven_governance_access.{name}"),
        change: planguard_plan::Change {
            actions: vec![Action::Create],
            before: None,
            after: Some(ResourceValues {
                access_data: Some(vec![access]),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}
