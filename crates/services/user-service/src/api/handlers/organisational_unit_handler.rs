//! Organisational unit handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use common::AppResult;
use domain::{OrganisationalUnitDraft, OrganisationalUnitView};

use crate::api::extractors::{AppJson, AppPath};
use crate::api::state::AppState;
use crate::api::API_BASE;

pub fn organisational_unit_routes() -> Router<AppState> {
    Router::new()
        .route("/organisational-unit", get(list_units).post(create_unit))
        .route(
            "/organisational-unit/:unit_id",
            get(get_unit).delete(delete_unit),
        )
}

/// Find all organisational units
#[utoipa::path(
    get,
    path = "/api/v1.0/organisational-unit",
    tag = "Organisational units",
    responses(
        (status = 200, description = "List of all units with their users", body = Vec<OrganisationalUnitView>)
    )
)]
pub async fn list_units(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<OrganisationalUnitView>>> {
    info!("Get all organisational units from the database");
    Ok(Json(state.unit_service.list_units().await?))
}

/// Create a new organisational unit
#[utoipa::path(
    post,
    path = "/api/v1.0/organisational-unit",
    tag = "Organisational units",
    request_body = OrganisationalUnitDraft,
    responses(
        (status = 201, description = "Unit created, Location header points at it"),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_unit(
    State(state): State<AppState>,
    AppJson(draft): AppJson<OrganisationalUnitDraft>,
) -> AppResult<impl IntoResponse> {
    info!("Create new organisational unit in database");
    let id = state.unit_service.create_unit(draft).await?;
    let location = format!("{}/organisational-unit/{}", API_BASE, id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Find organisational unit by ID
#[utoipa::path(
    get,
    path = "/api/v1.0/organisational-unit/{unit_id}",
    tag = "Organisational units",
    params(
        ("unit_id" = i64, Path, description = "Organisational unit ID")
    ),
    responses(
        (status = 200, description = "Unit with its users", body = OrganisationalUnitView),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn get_unit(
    State(state): State<AppState>,
    AppPath(unit_id): AppPath<i64>,
) -> AppResult<Json<OrganisationalUnitView>> {
    info!(unit_id, "Get organisational unit by id");
    Ok(Json(state.unit_service.get_unit(unit_id).await?))
}

/// Delete organisational unit by ID
#[utoipa::path(
    delete,
    path = "/api/v1.0/organisational-unit/{unit_id}",
    tag = "Organisational units",
    params(
        ("unit_id" = i64, Path, description = "Organisational unit ID")
    ),
    responses(
        (status = 200, description = "Unit deleted, its users are unassigned"),
        (status = 404, description = "Unit not found")
    )
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    AppPath(unit_id): AppPath<i64>,
) -> AppResult<StatusCode> {
    info!(unit_id, "Delete organisational unit");
    state.unit_service.delete_unit(unit_id).await?;
    Ok(StatusCode::OK)
}
