//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health_routes, organisational_unit_routes, user_routes};
use super::openapi::ApiDoc;
use super::state::AppState;
use super::API_BASE;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(API_BASE, user_routes().merge(organisational_unit_routes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
