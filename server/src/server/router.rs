use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::api;
use crate::app::SharedState;
use crate::config::AppConfig;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    let config = state.config();

    let mut router = Router::new()
        // --- Core ---
        .route("/", get(api::status::index))
        .route("/health", get(api::status::health))
        // --- Filters ---
        .merge(build_upload_routes(config.max_upload_bytes))
        // --- Middleware ---
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config) {
        router = router.layer(cors);
    }

    router
        .layer(middleware::from_fn(preflight_no_content))
        .layer(CatchPanicLayer::custom(api::error::panic_response))
        .with_state(state)
}

fn build_upload_routes(max_upload_bytes: usize) -> Router<SharedState> {
    Router::new()
        .route(
            "/apply_filter",
            post(api::filter::apply_filter).options(api::filter::preflight),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// CORS policy from the configured allow-list. `None` when the list is empty.
fn build_cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if config.allowed_origins.is_empty() {
        return None;
    }

    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!(origin = %origin, "Skipping unusable CORS origin: {e}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any),
    )
}

/// Preflight answers carry no body, so report them as 204 rather than 200.
async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let mut res = next.run(req).await;
    if is_options && res.status() == StatusCode::OK {
        *res.status_mut() = StatusCode::NO_CONTENT;
    }
    res
}
