//! The `check` use case: evaluate a plan against the governance policy.

use anyhow::Context;
use planguard_plan::Plan;
use planguard_types::EvalResult;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Plan JSON text, as produced by `terraform show -json`.
    pub plan_json: &'a str,
    /// User identified as the requester of the change.
    pub requester: &'a str,
    /// Users identified as the approvers of the change, already split.
    pub approvers: Vec<String>,
}

/// Parse the plan and run the evaluation.
///
/// Only a malformed plan document fails here; a requester or approver that
/// does not resolve is a policy outcome, not an error.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<EvalResult> {
    let plan = Plan::from_json(input.plan_json).context("parse plan JSON")?;
    Ok(planguard_domain::evaluate(
        &plan,
        input.requester,
        &input.approvers,
    ))
}

/// Split a comma-separated approver list. Empty segments carry no identity
/// and are dropped.
pub fn split_approvers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Serialize the result to its single-line wire form.
pub fn serialize_result(result: &EvalResult) -> anyhow::Result<String> {
    serde_json::to_string(result).context("serialize result")
}

/// Map the verdict to an exit code: 0 = compliant, 2 = violations found.
pub fn result_exit_code(result: &EvalResult) -> i32 {
    if result.ok { 0 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planguard_types::MSG_APPROVAL_REQUIRED;

    const PLAN: &str = r#"{
        "resource_changes": [
            {
                "type": "aiven_kafka_topic",
                "name": "foo",
                "address": "aiven_kafka_topic.foo",
                "change": {
                    "actions": ["create"],
                    "before": null,
                    "after": {"owner_user_group_id": "ug1", "topic_name": "foo"},
                    "after_unknown": {}
                }
            }
        ],
        "prior_state": {"values": {"root_module": {"resources": [
            {
                "type": "aiven_external_identity",
                "name": "alice",
                "address": "data.aiven_external_identity.alice",
                "values": {"internal_user_id": "u1", "external_user_id": "alice"}
            },
            {
                "type": "aiven_external_identity",
                "name": "bob",
                "address": "data.aiven_external_identity.bob",
                "values": {"internal_user_id": "u2", "external_user_id": "bob"}
            },
            {
                "type": "aiven_organization_user_group_member",
                "name": "alice_ug1",
                "address": "aiven_organization_user_group_member.alice_ug1",
                "values": {"group_id": "ug1", "user_id": "u1"}
            },
            {
                "type": "aiven_organization_user_group_member",
                "name": "bob_ug1",
                "address": "aiven_organization_user_group_member.bob_ug1",
                "values": {"group_id": "ug1", "user_id": "u2"}
            }
        ]}}},
        "configuration": {"root_module": {"resources": []}}
    }"#;

    #[test]
    fn compliant_plan_checks_out() {
        let result = run_check(CheckInput {
            plan_json: PLAN,
            requester: "alice",
            approvers: split_approvers("bob,charlie"),
        })
        .expect("run check");

        assert!(result.ok);
        assert_eq!(result_exit_code(&result), 0);
        assert_eq!(
            serialize_result(&result).expect("serialize"),
            r#"{"ok":true,"errors":[]}"#
        );
    }

    #[test]
    fn missing_approval_reports_a_violation() {
        let result = run_check(CheckInput {
            plan_json: PLAN,
            requester: "alice",
            approvers: split_approvers("alice"),
        })
        .expect("run check");

        assert!(!result.ok);
        assert_eq!(result_exit_code(&result), 2);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].message, MSG_APPROVAL_REQUIRED);
    }

    #[test]
    fn malformed_plan_is_an_error() {
        let err = run_check(CheckInput {
            plan_json: "not json",
            requester: "alice",
            approvers: Vec::new(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("parse plan JSON"));
    }

    #[test]
    fn split_approvers_drops_empty_segments() {
        assert_eq!(split_approvers("bob,charlie"), vec!["bob", "charlie"]);
        assert_eq!(split_approvers(" bob , charlie "), vec!["bob", "charlie"]);
        assert!(split_approvers("").is_empty());
        assert_eq!(split_approvers("bob,,"), vec!["bob"]);
    }
}
