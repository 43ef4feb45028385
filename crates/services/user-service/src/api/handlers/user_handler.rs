//! User handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::info;

use common::AppResult;
use domain::{UserDraft, UserView};

use crate::api::extractors::{AppJson, AppPath};
use crate::api::state::AppState;
use crate::api::API_BASE;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route(
            "/user/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/user/:user_id/:unit_id", put(assign_organisational_unit))
}

/// Find all users
#[utoipa::path(
    get,
    path = "/api/v1.0/user",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserView>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserView>>> {
    info!("Get all users from the database");
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/v1.0/user",
    tag = "Users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "User created, Location header points at it"),
        (status = 400, description = "Invalid email or malformed body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(draft): AppJson<UserDraft>,
) -> AppResult<impl IntoResponse> {
    info!("Create new user in database");
    let id = state.user_service.create_user(draft).await?;
    let location = format!("{}/user/{}", API_BASE, id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Find user by ID
#[utoipa::path(
    get,
    path = "/api/v1.0/user/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserView),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<Json<UserView>> {
    info!(user_id, "Get user from the database by id");
    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(user))
}

/// Replace user data by ID
#[utoipa::path(
    put,
    path = "/api/v1.0/user/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    request_body = UserDraft,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Invalid email or malformed body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
    AppJson(draft): AppJson<UserDraft>,
) -> AppResult<StatusCode> {
    info!(user_id, "Update user");
    state.user_service.update_user(user_id, draft).await?;
    Ok(StatusCode::OK)
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/api/v1.0/user/{user_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    info!(user_id, "Delete user");
    state.user_service.delete_user(user_id).await?;
    Ok(StatusCode::OK)
}

/// Assign an organisational unit to a user
#[utoipa::path(
    put,
    path = "/api/v1.0/user/{user_id}/{unit_id}",
    tag = "Users",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("unit_id" = i64, Path, description = "Organisational unit ID")
    ),
    responses(
        (status = 200, description = "Organisational unit assigned"),
        (status = 404, description = "User or organisational unit not found")
    )
)]
pub async fn assign_organisational_unit(
    State(state): State<AppState>,
    AppPath((user_id, unit_id)): AppPath<(i64, i64)>,
) -> AppResult<StatusCode> {
    info!(user_id, unit_id, "Assign user to organisational unit");
    state
        .user_service
        .assign_organisational_unit(user_id, unit_id)
        .await?;
    Ok(StatusCode::OK)
}
