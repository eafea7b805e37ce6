//! Application route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/users", user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
