//! User handlers.
//!
//! Each route maps to exactly one service call; input validation has
//! already happened in `ValidatedJson` by the time a handler body runs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}

/// Partially update a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(&id, payload).await?;
    Ok(Json(user))
}

/// Delete a user, returning the removed record
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.delete_user(&id).await?;
    Ok(Json(user))
}
