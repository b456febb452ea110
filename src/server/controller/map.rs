use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        map::{CreateMapDto, MapDto, UpdateMapDto},
    },
    server::{
        controller::param::ValidJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::map::{CreateMapParam, UpdateMapParam},
        service::map::MapService,
        state::AppState,
    },
};

/// Tag for grouping map endpoints in OpenAPI documentation
pub static MAP_TAG: &str = "map";

/// Create the map of a motorbike.
///
/// Each motorbike has at most one map. The zoom level defaults to 12.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new map
/// - `400 Bad Request` - Invalid map data
/// - `404 Not Found` - Motorbike absent
/// - `409 Conflict` - The motorbike already has a map
#[utoipa::path(
    post,
    path = "/api/map",
    tag = MAP_TAG,
    request_body = CreateMapDto,
    responses(
        (status = 201, description = "Map created", body = DataDto<MapDto>),
        (status = 400, description = "Invalid map data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto),
        (status = 409, description = "Motorbike already has a map", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_map(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateMapDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let map = MapService::new(&state.db)
        .create(CreateMapParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::one(map.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/maps",
    tag = MAP_TAG,
    responses(
        (status = 200, description = "All maps", body = DataDto<Vec<MapDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_maps(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let maps = MapService::new(&state.db).get_all().await?;
    let maps_dto: Vec<_> = maps.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(maps_dto))))
}

#[utoipa::path(
    get,
    path = "/api/map/{id}",
    tag = MAP_TAG,
    params(("id" = i32, Path, description = "Map ID")),
    responses(
        (status = 200, description = "Map", body = DataDto<MapDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_map(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let map = MapService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::one(map.into_dto()))))
}

/// Replace a map.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/map/{id}",
    tag = MAP_TAG,
    params(("id" = i32, Path, description = "Map ID")),
    request_body = UpdateMapDto,
    responses(
        (status = 200, description = "Map updated", body = DataDto<MapDto>),
        (status = 400, description = "Invalid map data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_map(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateMapDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let map = MapService::new(&state.db)
        .update(id, UpdateMapParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(map.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/map/{id}",
    tag = MAP_TAG,
    params(("id" = i32, Path, description = "Map ID")),
    responses(
        (status = 204, description = "Map deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Map not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_map(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    MapService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/map/motorbike/{motorbike_id}",
    tag = MAP_TAG,
    params(("motorbike_id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Map of the motorbike", body = DataDto<MapDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Motorbike or map not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_motorbike_map(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(motorbike_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let map = MapService::new(&state.db)
        .get_by_motorbike(motorbike_id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(map.into_dto()))))
}

/// Replace the map of a motorbike.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/map/motorbike/{motorbike_id}",
    tag = MAP_TAG,
    params(("motorbike_id" = i32, Path, description = "Motorbike ID")),
    request_body = UpdateMapDto,
    responses(
        (status = 200, description = "Map updated", body = DataDto<MapDto>),
        (status = 400, description = "Invalid map data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike or map not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_motorbike_map(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(motorbike_id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateMapDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let map = MapService::new(&state.db)
        .update_by_motorbike(motorbike_id, UpdateMapParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(map.into_dto()))))
}
