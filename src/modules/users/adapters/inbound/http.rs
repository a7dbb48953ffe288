use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::modules::users::core::user::{NewUser, UserPatch};
use crate::modules::users::use_cases::user_service::ApplicationError;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/{id}", get(read).patch(update).delete(remove))
}

fn failure(err: ApplicationError) -> axum::response::Response {
    match err {
        ApplicationError::EmailTaken => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "detail": err.to_string() })),
        )
            .into_response(),
        ApplicationError::Repository(_) => {
            error!(error = %err, "user storage failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new_user) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.users.create_user(new_user).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.users.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn read(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.users.get_user(id).await {
        Ok(Some(user)) => Json(user).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => failure(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.users.update_user(id, patch).await {
        Ok(Some(user)) => Json(user).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => failure(err),
    }
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.users.delete_user(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => failure(err),
    }
}
