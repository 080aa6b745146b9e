//! The per-resource-type policy checks and their registry.

use planguard_plan::{Plan, PriorStateResource, ResourceChange, ResourceType};
use planguard_types::Violation;

mod access_approval;
mod approved_by_owner;
mod requested_by_owner;
mod utils;

/// A single policy check run against one resource change.
///
/// Checks receive the resolved requester (if any), the resolved approver
/// set, and the whole plan for membership lookups.
pub type Check = fn(
    &ResourceChange,
    Option<&PriorStateResource>,
    &[&PriorStateResource],
    &Plan,
) -> CheckResult;

/// Transient per-check output.
#[derive(Clone, Debug, Default)]
pub struct CheckResult {
    pub violations: Vec<Violation>,
}

impl CheckResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Derived, never stored: a check passed iff it produced no violations.
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }
}

const KAFKA_TOPIC_CHECKS: &[Check] = &[requested_by_owner::run, approved_by_owner::run];
const GOVERNANCE_ACCESS_CHECKS: &[Check] = &[access_approval::run];

/// The checks registered for a governed resource type, in evaluation order.
///
/// Kinds without an entry are not governed and produce no violations; that
/// includes the identity and membership resources the resolver itself reads.
pub fn checks_for(resource_type: ResourceType) -> &'static [Check] {
    match resource_type {
        ResourceType::KafkaTopic => KAFKA_TOPIC_CHECKS,
        ResourceType::GovernanceAccess => GOVERNANCE_ACCESS_CHECKS,
        ResourceType::ExternalIdentity | ResourceType::UserGroupMember | ResourceType::Other => &[],
    }
}
