//! HTTP service exposing the same evaluation as the CLI.
//!
//! `POST /check` takes the requester, the comma-separated approver list, and
//! an inline plan document, and returns the evaluation result: 200 when the
//! plan is compliant, 422 when violations were found. The body is the same
//! JSON the CLI prints.

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use planguard_app::split_approvers;
use planguard_plan::Plan;
use planguard_types::EvalResult;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    requester: String,
    /// Comma-separated, matching the CLI surface.
    #[serde(default)]
    approvers: String,
    #[serde(default)]
    plan: Plan,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let app = router();

    let addr =
        std::env::var("PLANGUARD_ADDR").unwrap_or_else(|_| "0.0.0.0:1323".to_string());
    tracing::info!("planguard-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/check", post(check))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "planguard-server" }))
}

async fn check(Json(request): Json<CheckRequest>) -> (StatusCode, Json<EvalResult>) {
    let approvers = split_approvers(&request.approvers);
    let result = planguard_domain::evaluate(&request.plan, &request.requester, &approvers);

    let status = if result.ok {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_plan_is_compliant() {
        let request = CheckRequest {
            requester: "alice".to_string(),
            approvers: "bob".to_string(),
            plan: Plan::default(),
        };

        let (status, Json(result)) = check(Json(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(result.ok);
    }

    #[tokio::test]
    async fn violations_map_to_unprocessable_entity() {
        let request: CheckRequest = serde_json::from_value(json!({
            "requester": "alice",
            "approvers": "bob",
            "plan": {
                "resource_changes": [{
                    "type": "aiven_kafka_topic",
                    "name": "foo",
                    "address": "aiven_kafka_topic.foo",
                    "change": {
                        "actions": ["create"],
                        "before": null,
                        "after": {"owner_user_group_id": "ug1"},
                        "after_unknown": {}
                    }
                }]
            }
        }))
        .expect("parse request");

        let (status, Json(result)) = check(Json(request)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!result.ok);
        assert_eq!(result.violations.len(), 2);
    }
}
