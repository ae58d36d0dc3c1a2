//! HTTP adapters - REST API implementations.
//!
//! `api_router` wraps the assessment routes with tracing, CORS and timeout
//! layers configured from `ServerConfig`.

pub mod assessment;

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use assessment::{assessment_router, AssessmentApiError, AssessmentAppState};

/// Builds the full application router.
pub fn api_router(state: AssessmentAppState, server: &ServerConfig) -> Router {
    assessment_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(server))
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            ))),
    )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentHistory;
    use crate::domain::assessment::AssessmentEngine;
    use crate::domain::questionnaire::CatalogVariant;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn layered_router_serves_requests() {
        let state = AssessmentAppState::new(
            AssessmentEngine::default(),
            Arc::new(InMemoryAssessmentHistory::new()),
            CatalogVariant::Short,
        );
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let app = api_router(state, &server);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/constitutions/pinghe")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }
}
