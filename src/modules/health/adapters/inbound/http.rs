use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health))
        .route("/readyz", get(ready))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Readiness has no dependencies to probe while users live in memory.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse { ready: true })
}

#[cfg(test)]
mod health_http_inbound_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::config::settings::Settings;
    use crate::shell::state::AppState;

    use super::routes;

    #[rstest]
    #[case("/healthz", serde_json::json!({ "status": "ok" }))]
    #[case("/readyz", serde_json::json!({ "ready": true }))]
    #[tokio::test]
    async fn it_should_answer_probes(#[case] uri: &str, #[case] expected: serde_json::Value) {
        let app = routes().with_state(AppState::in_memory(Arc::new(Settings::default())));
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, expected);
    }
}
