//! PPE Marts API crate - axum HTTP server, route handlers, middleware.
//!
//! Serves the product catalog, the requirement calculator, share links
//! and the safety assistant as JSON over HTTP.

pub mod error;
pub mod handlers;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
