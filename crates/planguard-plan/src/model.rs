use planguard_types::Tag;
use serde::Deserialize;

/// The governed resource kinds the engine knows about.
///
/// Anything else deserializes to [`ResourceType::Other`]; untracked types are
/// not governed and produce no violations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "aiven_kafka_topic")]
    KafkaTopic,
    #[serde(rename = "aiven_external_identity")]
    ExternalIdentity,
    #[serde(rename = "aiven_organization_user_group_member")]
    UserGroupMember,
    #[serde(rename = "aiven_governance_access")]
    GovernanceAccess,
    #[default]
    #[serde(other)]
    Other,
}

/// A planned action on a resource.
///
/// `update` implies both the before and after snapshots must be checked,
/// `create` only the after, `delete` only the before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Create,
    Update,
    Delete,
    Read,
    #[serde(other)]
    NoOp,
}

/// The root plan document. Immutable after load; shared read-only by every
/// evaluation component.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
    #[serde(default)]
    pub prior_state: PriorState,
    #[serde(default)]
    pub configuration: Configuration,
}

impl Plan {
    /// Resources as they exist before the change is applied.
    pub fn prior_resources(&self) -> &[PriorStateResource] {
        &self.prior_state.values.root_module.resources
    }

    /// The as-written resource graph.
    pub fn config_resources(&self) -> &[ConfigurationResource] {
        &self.configuration.root_module.resources
    }

    /// Configuration resource at the given plan address, if any.
    pub fn config_resource(&self, address: &str) -> Option<&ConfigurationResource> {
        self.config_resources().iter().find(|r| r.address == address)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriorState {
    #[serde(default)]
    pub values: PriorStateValues,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriorStateValues {
    #[serde(default)]
    pub root_module: PriorStateModule,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriorStateModule {
    #[serde(default)]
    pub resources: Vec<PriorStateResource>,
}

/// A resource as it exists before the change. Identities and group
/// memberships that already exist are resolved against these.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriorStateResource {
    #[serde(rename = "type", default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub values: PriorStateResourceValues,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PriorStateResourceValues {
    #[serde(default)]
    pub internal_user_id: String,
    #[serde(default)]
    pub external_user_id: String,
    pub group_id: Option<String>,
    pub user_id: Option<String>,
}

/// One proposed change from the `resource_changes` section.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResourceChange {
    #[serde(rename = "type", default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub change: Change,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub actions: Vec<Action>,
    pub before: Option<ResourceValues>,
    pub after: Option<ResourceValues>,
    #[serde(default)]
    pub after_unknown: AfterUnknown,
}

impl Change {
    pub fn has_action(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// Per-field flags for values that cannot be determined until apply.
///
/// When the owner group is itself created in the same plan its identifier is
/// unknown here, and membership has to be resolved against the configuration
/// graph instead of state.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct AfterUnknown {
    #[serde(default)]
    pub owner_user_group_id: bool,
}

/// A before/after resource snapshot.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResourceValues {
    pub internal_user_id: Option<String>,
    pub owner_user_group_id: Option<String>,
    pub tag: Option<Vec<Tag>>,
    pub project: Option<String>,
    pub service_name: Option<String>,
    pub topic_name: Option<String>,
    pub access_data: Option<Vec<AccessData>>,
}

/// The access block of an access-granting resource.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccessData {
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub acls: Vec<AccessAcl>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccessAcl {
    #[serde(default)]
    pub resource_name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub root_module: ConfigurationModule,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigurationModule {
    #[serde(default)]
    pub resources: Vec<ConfigurationResource>,
}

/// A resource from the as-written configuration graph, consulted only when a
/// value is still unknown at plan time.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigurationResource {
    #[serde(rename = "type", default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub expressions: Expressions,
}

/// The attribute expressions the membership resolver follows.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Expressions {
    pub owner_user_group_id: Option<Expression>,
    pub internal_user_id: Option<Expression>,
    pub group_id: Option<Expression>,
    pub user_id: Option<Expression>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Expression {
    #[serde(default)]
    pub references: Vec<String>,
}

impl Expression {
    /// The address of the resource this expression refers to.
    ///
    /// The reference list's second entry names the referenced address; a list
    /// with fewer than two entries carries no usable reference.
    pub fn referenced_address(&self) -> Option<&str> {
        self.references.get(1).map(String::as_str)
    }
}
