//! API layer - HTTP handlers, extractors and route definitions.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;

/// Prefix of every resource route
pub const API_BASE: &str = "/api/v1.0";
