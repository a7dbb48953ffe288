use axum::{Router, http::HeaderValue, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::modules::health::adapters::inbound::http as health_http;
use crate::modules::users::adapters::inbound::http as users_http;
use crate::shell::docs;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let settings = state.settings.clone();

    let mut router = Router::new()
        .merge(health_http::routes())
        .merge(users_http::routes());
    if settings.enable_docs {
        router = router.route(docs::OPENAPI_PATH, get(docs::openapi));
    }

    router
        .layer(cors_layer(&settings.backend_cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentials are allowed, so `*` mirrors the caller's origin instead of answering with a wildcard.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!(origin = %origin, "skipping invalid CORS origin"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
