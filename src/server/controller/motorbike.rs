use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::MotorbikeStatus;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        motorbike::{
            CreateMotorbikeDto, MotorbikeDto, MotorbikePhotoDto, UpdateLockStatusDto,
            UpdateMotorbikeDto, UpdateMotorbikeStatusDto,
        },
    },
    server::{
        controller::param::ValidJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::motorbike::{CreateMotorbikeParam, UpdateMotorbikeParam},
        service::motorbike::MotorbikeService,
        state::AppState,
    },
};

/// Tag for grouping motorbike endpoints in OpenAPI documentation
pub static MOTORBIKE_TAG: &str = "motorbike";

/// Register a motorbike.
///
/// # Access Control
/// - `Admin` - Only admins can register motorbikes
///
/// # Returns
/// - `201 Created` - The new motorbike with its photos
/// - `400 Bad Request` - Invalid motorbike data
#[utoipa::path(
    post,
    path = "/api/motorbike",
    tag = MOTORBIKE_TAG,
    request_body = CreateMotorbikeDto,
    responses(
        (status = 201, description = "Motorbike registered", body = DataDto<MotorbikeDto>),
        (status = 400, description = "Invalid motorbike data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_motorbike(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateMotorbikeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let motorbike = MotorbikeService::new(&state.db)
        .create(CreateMotorbikeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::one(motorbike.into_dto()))))
}

/// List every motorbike that has not been deleted.
#[utoipa::path(
    get,
    path = "/api/motorbikes",
    tag = MOTORBIKE_TAG,
    responses(
        (status = 200, description = "All motorbikes", body = DataDto<Vec<MotorbikeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_motorbikes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let motorbikes = MotorbikeService::new(&state.db).get_all().await?;
    let motorbikes_dto: Vec<_> = motorbikes.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(motorbikes_dto))))
}

#[utoipa::path(
    get,
    path = "/api/motorbikes/available",
    tag = MOTORBIKE_TAG,
    responses(
        (status = 200, description = "Motorbikes ready to rent", body = DataDto<Vec<MotorbikeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_available_motorbikes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_by_status(&state, &headers, MotorbikeStatus::Available).await
}

#[utoipa::path(
    get,
    path = "/api/motorbikes/maintenance",
    tag = MOTORBIKE_TAG,
    responses(
        (status = 200, description = "Motorbikes under maintenance", body = DataDto<Vec<MotorbikeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_maintenance_motorbikes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_by_status(&state, &headers, MotorbikeStatus::Maintenance).await
}

#[utoipa::path(
    get,
    path = "/api/motorbikes/rented",
    tag = MOTORBIKE_TAG,
    responses(
        (status = 200, description = "Motorbikes currently rented", body = DataDto<Vec<MotorbikeDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rented_motorbikes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    list_by_status(&state, &headers, MotorbikeStatus::Rented).await
}

async fn list_by_status(
    state: &AppState,
    headers: &HeaderMap,
    status: MotorbikeStatus,
) -> Result<(StatusCode, Json<DataDto<Vec<MotorbikeDto>>>), AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, headers)
        .require(&[])
        .await?;

    let motorbikes = MotorbikeService::new(&state.db)
        .get_by_status(status)
        .await?;
    let motorbikes_dto: Vec<_> = motorbikes.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(motorbikes_dto))))
}

#[utoipa::path(
    get,
    path = "/api/motorbike/{id}",
    tag = MOTORBIKE_TAG,
    params(("id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Motorbike", body = DataDto<MotorbikeDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_motorbike(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let motorbike = MotorbikeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::one(motorbike.into_dto()))))
}

/// Replace a motorbike record.
///
/// An empty photo list keeps the stored photos.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/motorbike/{id}",
    tag = MOTORBIKE_TAG,
    params(("id" = i32, Path, description = "Motorbike ID")),
    request_body = UpdateMotorbikeDto,
    responses(
        (status = 200, description = "Motorbike updated", body = DataDto<MotorbikeDto>),
        (status = 400, description = "Invalid motorbike data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_motorbike(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateMotorbikeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let motorbike = MotorbikeService::new(&state.db)
        .update(id, UpdateMotorbikeParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(motorbike.into_dto()))))
}

/// Soft-delete a motorbike.
///
/// The record is kept for ride and connection history but disappears from every listing.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/motorbike/{id}",
    tag = MOTORBIKE_TAG,
    params(("id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 204, description = "Motorbike deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_motorbike(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    MotorbikeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/motorbike/{id}/photos",
    tag = MOTORBIKE_TAG,
    params(("id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Motorbike photos", body = DataDto<Vec<MotorbikePhotoDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_motorbike_photos(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let photos = MotorbikeService::new(&state.db).get_photos(id).await?;
    let photos_dto: Vec<_> = photos.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(photos_dto))))
}

/// Set the availability status of a motorbike.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/motorbike/{id}/status",
    tag = MOTORBIKE_TAG,
    params(("id" = i32, Path, description = "Motorbike ID")),
    request_body = UpdateMotorbikeStatusDto,
    responses(
        (status = 200, description = "Status updated", body = DataDto<MotorbikeDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_motorbike_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateMotorbikeStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let motorbike = MotorbikeService::new(&state.db)
        .update_status(id, payload.status.into())
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(motorbike.into_dto()))))
}

/// Set the lock status of a motorbike.
///
/// Called by the lock hardware integration, which authenticates as an admin. Locking is a
/// prerequisite for submitting the ride photo and for finishing a ride.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/motorbike/{id}/lock-status",
    tag = MOTORBIKE_TAG,
    params(("id" = i32, Path, description = "Motorbike ID")),
    request_body = UpdateLockStatusDto,
    responses(
        (status = 200, description = "Lock status updated", body = DataDto<MotorbikeDto>),
        (status = 400, description = "Unknown lock status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_motorbike_lock_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateLockStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let motorbike = MotorbikeService::new(&state.db)
        .update_lock_status(id, payload.lock_status.into())
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(motorbike.into_dto()))))
}
