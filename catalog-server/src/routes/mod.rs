pub mod v1;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use catalog_config::CorsConfig;
use catalog_core::api::routes::{HEALTH, PING};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::AppState;
use crate::handlers::system::{health_handler, ping_handler};

/// Build the complete application router with middleware applied.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config().cors);

    Router::new()
        .route(PING, get(ping_handler))
        .route(HEALTH, get(health_handler))
        .merge(v1::create_v1_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let allow_origin = if cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
