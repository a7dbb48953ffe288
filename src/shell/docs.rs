use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::shell::state::AppState;

pub const OPENAPI_PATH: &str = "/openapi.json";

pub async fn openapi(State(state): State<AppState>) -> Json<Value> {
    let settings = &state.settings;
    Json(json!({
        "openapi": "3.1.0",
        "info": {
            "title": settings.project_name,
            "version": settings.version,
        },
        "paths": {
            "/healthz": { "get": { "tags": ["health"], "summary": "Liveness probe" } },
            "/readyz": { "get": { "tags": ["health"], "summary": "Readiness probe" } },
            "/users": {
                "get": { "tags": ["users"], "summary": "List users, newest first" },
                "post": { "tags": ["users"], "summary": "Register a user" },
            },
            "/users/{id}": {
                "get": { "tags": ["users"], "summary": "Read a user" },
                "patch": { "tags": ["users"], "summary": "Update the given fields of a user" },
                "delete": { "tags": ["users"], "summary": "Delete a user" },
            },
        },
    }))
}
