//! Typed, read-only view over a Terraform plan in JSON form.
//!
//! The engine consumes three plan sections: the proposed resource changes,
//! the prior (pre-apply) state, and the as-written configuration graph with
//! its expression reference chains. Everything that may be absent in a real
//! plan is optional here; a missing section or field is a valid value meaning
//! "not present", never a parse failure.

#![forbid(unsafe_code)]

pub mod load;
pub mod model;

pub use load::PlanError;
pub use model::{
    AccessAcl, AccessData, Action, AfterUnknown, Change, Configuration, ConfigurationModule,
    ConfigurationResource, Expression, Expressions, Plan, PriorState, PriorStateModule,
    PriorStateResource, PriorStateResourceValues, PriorStateValues, ResourceChange, ResourceType,
    ResourceValues,
};
