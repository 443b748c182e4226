use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, CorsConfig};
use leadrelay_contact::RelayService;

mod email;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: RelayService,
}

pub fn router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/email/send", post(email::send))
        // Legacy route kept for the earlier revision of the frontend
        .route("/api/email/test-send", post(email::send))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Create a CORS layer allowing exactly the configured browser origin.
///
/// Preflights from any other origin are answered without allow headers,
/// so the browser refuses them before the relay handler ever runs.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    match config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => {
            layer = layer.allow_origin(origin);
        }
        Err(e) => {
            tracing::warn!(
                origin = %config.allowed_origin,
                error = %e,
                "Invalid allowed_origin, cross-origin requests will be refused"
            );
        }
    }

    layer
}
