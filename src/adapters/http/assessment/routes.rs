//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_assessment, get_constitution, get_questionnaire, latest_assessment, list_assessments,
    AssessmentAppState,
};

/// Create the assessment API router.
///
/// # Routes
///
/// ## Reference data
/// - `GET /api/questionnaires/:variant` - Questions and answer options (`short` | `full`)
/// - `GET /api/constitutions/:key` - Profile and advice for one category
///
/// ## Assessments
/// - `POST /api/sessions/:session_id/assessments` - Score answers and append to history
/// - `GET /api/sessions/:session_id/assessments` - History, oldest first
/// - `GET /api/sessions/:session_id/assessments/latest` - Most recent assessment
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new()
        .route("/api/questionnaires/:variant", get(get_questionnaire))
        .route("/api/constitutions/:key", get(get_constitution))
        .route(
            "/api/sessions/:session_id/assessments",
            post(create_assessment).get(list_assessments),
        )
        .route(
            "/api/sessions/:session_id/assessments/latest",
            get(latest_assessment),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentHistory;
    use crate::domain::assessment::AssessmentEngine;
    use crate::domain::foundation::SessionId;
    use crate::domain::questionnaire::CatalogVariant;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AssessmentAppState::new(
            AssessmentEngine::default(),
            Arc::new(InMemoryAssessmentHistory::new()),
            CatalogVariant::Short,
        );
        assessment_router().with_state(state)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn questionnaire_route_returns_catalog() {
        let (status, body) = send(&app(), get("/api/questionnaires/full")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["variant"], "full");
        assert_eq!(body["total"], 67);
    }

    #[tokio::test]
    async fn unknown_questionnaire_is_404() {
        let (status, body) = send(&app(), get("/api/questionnaires/medium")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "UNKNOWN_CATALOG");
    }

    #[tokio::test]
    async fn constitution_route_returns_profile() {
        let (status, body) = send(&app(), get("/api/constitutions/qiyu")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "气郁质");

        let (status, _) = send(&app(), get("/api/constitutions/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_then_read_history() {
        let app = app();
        let session = SessionId::new();
        let uri = format!("/api/sessions/{}/assessments", session);

        // balanced items 1 and 3 at 5, reverse item 2 at 1, everything else at 1
        let mut answers: serde_json::Map<String, Value> =
            (1..=27).map(|id| (id.to_string(), json!(1))).collect();
        answers.insert("1".to_string(), json!(5));
        answers.insert("3".to_string(), json!(5));
        let (status, created) = send(&app, post_json(&uri, json!({ "answers": answers }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["variant"], "short");
        assert_eq!(created["report"]["primary"]["category"], "pinghe");
        assert_eq!(created["primaryProfile"]["category"], "pinghe");

        let (status, history) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history["total"], 1);

        let (status, latest) = send(&app, get(&format!("{}/latest", uri))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(latest["reportId"], created["reportId"]);
    }

    #[tokio::test]
    async fn invalid_answer_is_400_with_details() {
        let uri = format!("/api/sessions/{}/assessments", SessionId::new());
        let (status, body) = send(&app(), post_json(&uri, json!({ "answers": { "3": 7 } }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_ANSWER");
        assert_eq!(body["details"]["question_id"], "3");
    }

    #[tokio::test]
    async fn latest_for_empty_session_is_404() {
        let uri = format!("/api/sessions/{}/assessments/latest", SessionId::new());
        let (status, body) = send(&app(), get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_session_id_is_400() {
        let (status, body) = send(&app(), get("/api/sessions/abc/assessments")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }
}
