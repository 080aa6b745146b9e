use serde::{Deserialize, Serialize};

/// Violation message for a change whose requester is not in the owner group.
pub const MSG_REQUESTER_NOT_MEMBER: &str = "requesting user is not a member of the owner group";

/// Violation message for a change lacking an approval from the owner group.
pub const MSG_APPROVAL_REQUIRED: &str = "approval is required from a member of the owner group";

/// Key/value pair attached to a resource change, carried into violations for
/// traceability.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// A single policy violation, addressed to the resource that failed the check.
///
/// The message is serialized under the `error` key; consumers key on the
/// literal message strings, so new messages are additions, never rewordings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "error")]
    pub message: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Violation {
    /// The requester is required to be a member of the owner group but is not.
    pub fn requester_not_member(address: &str, tags: Option<&[Tag]>) -> Self {
        Self {
            message: MSG_REQUESTER_NOT_MEMBER.to_string(),
            address: address.to_string(),
            tags: tags.map(<[Tag]>::to_vec).unwrap_or_default(),
        }
    }

    /// No listed approver is a member of the owner group.
    pub fn approval_required(address: &str, tags: Option<&[Tag]>) -> Self {
        Self {
            message: MSG_APPROVAL_REQUIRED.to_string(),
            address: address.to_string(),
            tags: tags.map(<[Tag]>::to_vec).unwrap_or_default(),
        }
    }

    /// An access-granting change lacks an approval from an owner of one of the
    /// resources it grants access to. Addressed to the granting resource.
    pub fn approval_required_from_owner_of(grant_address: &str, target_address: &str) -> Self {
        Self {
            message: format!("approval is required from a owner of {target_address}"),
            address: grant_address.to_string(),
            tags: Vec::new(),
        }
    }
}

/// The overall evaluation outcome for a plan.
///
/// `ok` is derived from the violation list; it is never set independently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalResult {
    pub ok: bool,
    #[serde(rename = "errors")]
    pub violations: Vec<Violation>,
}

impl EvalResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            ok: violations.is_empty(),
            violations,
        }
    }
}
