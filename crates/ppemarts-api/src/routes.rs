//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, compression, rate
//! limiting and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use ppemarts_core::{PpeConfig, PpeError};

use crate::handlers;
use crate::rate_limit::RateLimiter;
use crate::state::AppState;

/// CORS layer for browser clients on any origin.
///
/// Origins are mirrored rather than wildcarded so that credentials can be
/// allowed. The layer answers every OPTIONS request itself, so no route
/// registers an OPTIONS handler.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            header::ACCEPT,
            HeaderName::from_static("accept-version"),
            header::CONTENT_LENGTH,
            HeaderName::from_static("content-md5"),
            header::CONTENT_TYPE,
            header::DATE,
            HeaderName::from_static("x-api-version"),
        ])
}

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let limiter = RateLimiter::new(state.config.server.rate_limit_per_sec);
    let body_limit = state.config.server.body_limit_bytes;

    let public_routes = Router::new().route("/health", get(handlers::health));

    let api_routes = Router::new()
        .route(
            "/api/ai-assistant",
            post(handlers::assistant).fallback(handlers::method_not_allowed),
        )
        .route("/api/products", get(handlers::products))
        .route("/api/products/{id}", get(handlers::product))
        .route("/api/categories", get(handlers::categories))
        .route("/api/equipment", get(handlers::equipment))
        .route("/api/presets", get(handlers::presets))
        .route("/api/calculator", get(handlers::calculator_defaults))
        .route("/api/calculate", post(handlers::calculate))
        .route("/api/share", get(handlers::share))
        .layer(axum::middleware::from_fn(
            crate::rate_limit::rate_limit_middleware,
        ))
        .layer(axum::Extension(limiter));

    public_routes
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Start the HTTP server on the configured host and port.
pub async fn start_server(config: &PpeConfig, state: AppState) -> Result<(), PpeError> {
    let addr = format!("{}:{}", config.general.host, config.general.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PpeError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| PpeError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
