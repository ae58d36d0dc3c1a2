//! Integration tests for the assessment HTTP surface.
//!
//! Exercises the fully layered router against both history adapters.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use constitution_assessment::adapters::http::{api_router, AssessmentAppState};
use constitution_assessment::adapters::storage::{
    FileAssessmentHistory, InMemoryAssessmentHistory,
};
use constitution_assessment::config::ServerConfig;
use constitution_assessment::domain::assessment::{AnswerPolicy, AssessmentEngine};
use constitution_assessment::domain::foundation::SessionId;
use constitution_assessment::domain::questionnaire::CatalogVariant;
use constitution_assessment::ports::AssessmentHistory;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(history: Arc<dyn AssessmentHistory>, policy: AnswerPolicy) -> Router {
    let state = AssessmentAppState::new(AssessmentEngine::new(policy), history, CatalogVariant::Full);
    api_router(state, &ServerConfig::default())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Answers every question of the full catalog with `value`.
async fn uniform_answers(app: &Router, value: i32) -> Value {
    let (_, questionnaire) = call(app, "GET", "/api/questionnaires/full", None).await;
    let answers: serde_json::Map<String, Value> = questionnaire["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| (q["id"].to_string(), json!(value)))
        .collect();
    Value::Object(answers)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn default_variant_applies_when_request_omits_it() {
    let app = app_with(Arc::new(InMemoryAssessmentHistory::new()), AnswerPolicy::Reject);
    let uri = format!("/api/sessions/{}/assessments", SessionId::new());

    let answers = uniform_answers(&app, 4).await;
    let (status, body) = call(&app, "POST", &uri, Some(json!({ "answers": answers }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["variant"], "full");
    assert_eq!(body["report"]["scores"]["counts"]["qixu"], 8);
    assert_eq!(body["report"]["scores"]["transformed"]["qixu"], 75);
    assert_eq!(body["report"]["radarData"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn file_history_persists_across_router_instances() {
    let temp_dir = TempDir::new().unwrap();
    let session = SessionId::new();
    let uri = format!("/api/sessions/{}/assessments", session);

    let first = app_with(
        Arc::new(FileAssessmentHistory::new(temp_dir.path())),
        AnswerPolicy::Reject,
    );
    let answers = uniform_answers(&first, 2).await;
    for _ in 0..2 {
        let (status, _) = call(
            &first,
            "POST",
            &uri,
            Some(json!({ "variant": "full", "answers": answers })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let second = app_with(
        Arc::new(FileAssessmentHistory::new(temp_dir.path())),
        AnswerPolicy::Reject,
    );
    let (status, history) = call(&second, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["total"], 2);
    assert_eq!(history["sessionId"], session.to_string());
}

#[tokio::test]
async fn clamp_policy_accepts_what_reject_refuses() {
    let session = SessionId::new();
    let uri = format!("/api/sessions/{}/assessments", session);
    let body = json!({ "variant": "short", "answers": { "1": 0, "2": 9 } });

    let strict = app_with(Arc::new(InMemoryAssessmentHistory::new()), AnswerPolicy::Reject);
    let (status, error) = call(&strict, "POST", &uri, Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_ANSWER");

    let (status, _) = call(&strict, "GET", &format!("{}/latest", uri), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let lenient = app_with(Arc::new(InMemoryAssessmentHistory::new()), AnswerPolicy::Clamp);
    let (status, created) = call(&lenient, "POST", &uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    // 1 -> 1, reverse item 9 -> 5 -> 1: (2 - 2) / 8 = 0
    assert_eq!(created["report"]["scores"]["transformed"]["pinghe"], 0);
    assert_eq!(created["report"]["scores"]["counts"]["pinghe"], 2);
}

#[tokio::test]
async fn response_includes_profiles_for_primary_and_tendencies() {
    let app = app_with(Arc::new(InMemoryAssessmentHistory::new()), AnswerPolicy::Reject);
    let uri = format!("/api/sessions/{}/assessments", SessionId::new());

    // yangxu items (ids 7-9) at 5, tebing items (ids 25-27) at 3, rest at 1
    let mut answers: serde_json::Map<String, Value> =
        (1..=27).map(|id| (id.to_string(), json!(1))).collect();
    for id in 7..=9 {
        answers.insert(id.to_string(), json!(5));
    }
    for id in 25..=27 {
        answers.insert(id.to_string(), json!(3));
    }

    let (status, body) = call(
        &app,
        "POST",
        &uri,
        Some(json!({ "variant": "short", "answers": answers })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["primaryProfile"]["category"], "yangxu");
    assert_eq!(body["tendencyProfiles"][0]["category"], "tebing");
    assert_eq!(body["report"]["tendencies"][0]["judgment"]["status"], "yes");
}
