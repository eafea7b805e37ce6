//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::{CreateUser, UpdateUser, User};

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "Create, list, fetch, update and delete users over a relational or document store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        health_handler::health_check,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
