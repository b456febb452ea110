use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        ride::{CreateRideDto, RideDto, RidePhotoForm, UpdateRideDto},
    },
    server::{
        controller::param::{DateRangeQuery, ValidJson},
        error::AppError,
        middleware::auth::{acting_user_id, AuthGuard, Permission},
        model::ride::{Ride, UpdateRideParam},
        service::{rental::RentalWorkflow, ride::RideService},
        state::AppState,
    },
};

/// Tag for grouping ride endpoints in OpenAPI documentation
pub static RIDE_TAG: &str = "ride";

/// Multipart field carrying the ride photo.
const PHOTO_FIELD: &str = "photo";

/// Start a ride.
///
/// Rents the motorbike for the rider, who defaults to the caller. Admins may start a
/// ride on behalf of another user.
///
/// # Returns
/// - `201 Created` - The open ride
/// - `400 Bad Request` - Motorbike not available or still has an open ride
/// - `403 Forbidden` - A normal user named another rider
/// - `404 Not Found` - Motorbike or user absent
#[utoipa::path(
    post,
    path = "/api/ride",
    tag = RIDE_TAG,
    request_body = CreateRideDto,
    responses(
        (status = 201, description = "Ride started", body = DataDto<RideDto>),
        (status = 400, description = "Motorbike not available", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot ride on behalf of another user", body = ErrorDto),
        (status = 404, description = "Motorbike or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateRideDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let user_id = acting_user_id(&caller, payload.user_id)?;

    let ride = RentalWorkflow::new(&state.db, &state.photos)
        .create_ride(user_id, payload.motorbike_id)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::one(ride.into_dto()))))
}

/// Upload the end-of-ride photo.
///
/// The motorbike must be locked. Storing the photo closes the bluetooth connection and
/// makes the motorbike available; the ride itself stays open until it is finished.
///
/// # Access Control
/// - `SelfOrAdmin` - The rider or an admin
///
/// # Returns
/// - `200 OK` - The ride with its photo path
/// - `400 Bad Request` - Missing `photo` field, photo already submitted, or no open connection
/// - `404 Not Found` - Ride absent
/// - `500 Internal Server Error` - The motorbike is not locked
#[utoipa::path(
    post,
    path = "/api/ride/{id}/photo",
    tag = RIDE_TAG,
    params(("id" = i32, Path, description = "Ride ID")),
    request_body(content = RidePhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored", body = DataDto<RideDto>),
        (status = 400, description = "Invalid upload or ride state", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the rider or an admin", body = ErrorDto),
        (status = 404, description = "Ride not found", body = ErrorDto),
        (status = 500, description = "Motorbike not locked or storage failure", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn submit_ride_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let ride = RideService::new(&state.db).get_by_id(id).await?;
    Permission::SelfOrAdmin(ride.user_id).check(&caller)?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(PHOTO_FIELD).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        upload = Some((file_name, bytes));
        break;
    }

    let Some((file_name, bytes)) = upload else {
        return Err(AppError::BadRequest(format!(
            "Missing multipart field '{}'",
            PHOTO_FIELD
        )));
    };
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Photo is empty".to_string()));
    }

    let ride = RentalWorkflow::new(&state.db, &state.photos)
        .submit_photo(id, &file_name, &bytes)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(ride.into_dto()))))
}

/// Finish a ride and bill it.
///
/// The motorbike must be locked. Cost is 3 per whole elapsed minute plus a base fee of 10.
///
/// # Access Control
/// - `SelfOrAdmin` - The rider or an admin
///
/// # Returns
/// - `200 OK` - The finished ride with duration and cost
/// - `400 Bad Request` - Motorbike not locked or ride already finished
/// - `404 Not Found` - Ride absent
#[utoipa::path(
    put,
    path = "/api/ride/finish/{id}",
    tag = RIDE_TAG,
    params(("id" = i32, Path, description = "Ride ID")),
    responses(
        (status = 200, description = "Ride finished", body = DataDto<RideDto>),
        (status = 400, description = "Motorbike not locked or ride already finished", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the rider or an admin", body = ErrorDto),
        (status = 404, description = "Ride not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn finish_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let ride = RideService::new(&state.db).get_by_id(id).await?;
    Permission::SelfOrAdmin(ride.user_id).check(&caller)?;

    let ride = RentalWorkflow::new(&state.db, &state.photos)
        .finish_ride(id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(ride.into_dto()))))
}

/// List every ride, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/rides",
    tag = RIDE_TAG,
    responses(
        (status = 200, description = "All rides", body = DataDto<Vec<RideDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rides(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rides = RideService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(rides_dto(rides))))
}

#[utoipa::path(
    get,
    path = "/api/ride/{id}",
    tag = RIDE_TAG,
    params(("id" = i32, Path, description = "Ride ID")),
    responses(
        (status = 200, description = "Ride", body = DataDto<RideDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the rider or an admin", body = ErrorDto),
        (status = 404, description = "Ride not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let ride = RideService::new(&state.db).get_by_id(id).await?;
    Permission::SelfOrAdmin(ride.user_id).check(&caller)?;

    Ok((StatusCode::OK, Json(DataDto::one(ride.into_dto()))))
}

/// Overwrite a ride record.
///
/// Bypasses the ride lifecycle; intended for correcting billing mistakes.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/ride/{id}",
    tag = RIDE_TAG,
    params(("id" = i32, Path, description = "Ride ID")),
    request_body = UpdateRideDto,
    responses(
        (status = 200, description = "Ride updated", body = DataDto<RideDto>),
        (status = 400, description = "Invalid ride data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Ride not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateRideDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let ride = RideService::new(&state.db)
        .update(id, UpdateRideParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(ride.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/ride/{id}",
    tag = RIDE_TAG,
    params(("id" = i32, Path, description = "Ride ID")),
    responses(
        (status = 204, description = "Ride deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Ride not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    RideService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the rides of a user, newest first.
///
/// # Access Control
/// - `SelfOrAdmin`
#[utoipa::path(
    get,
    path = "/api/rides/user/{user_id}",
    tag = RIDE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Rides of the user", body = DataDto<Vec<RideDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_rides(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let rides = RideService::new(&state.db).get_by_user(user_id).await?;

    Ok((StatusCode::OK, Json(rides_dto(rides))))
}

#[utoipa::path(
    get,
    path = "/api/rides/user/{user_id}/ride/{ride_id}",
    tag = RIDE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("ride_id" = i32, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Ride of the user", body = DataDto<RideDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "Ride not found for this user", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((user_id, ride_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let ride = RideService::new(&state.db)
        .get_by_user_and_id(user_id, ride_id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(ride.into_dto()))))
}

/// List finished rides of a user inside a date range.
///
/// # Access Control
/// - `SelfOrAdmin`
#[utoipa::path(
    get,
    path = "/api/rides/user/{user_id}/filter",
    tag = RIDE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Finished rides in range", body = DataDto<Vec<RideDto>>),
        (status = 400, description = "Missing or malformed dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_rides_between(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let range = query.into_range()?;
    let rides = RideService::new(&state.db)
        .get_finished_between(range, Some(user_id))
        .await?;

    Ok((StatusCode::OK, Json(rides_dto(rides))))
}

/// List finished rides of every user inside a date range.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/filtered-rides",
    tag = RIDE_TAG,
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Finished rides in range", body = DataDto<Vec<RideDto>>),
        (status = 400, description = "Missing or malformed dates", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rides_between(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let range = query.into_range()?;
    let rides = RideService::new(&state.db)
        .get_finished_between(range, None)
        .await?;

    Ok((StatusCode::OK, Json(rides_dto(rides))))
}

/// List the rides of a motorbike, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/rides/motorbike/{motorbike_id}",
    tag = RIDE_TAG,
    params(("motorbike_id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Rides of the motorbike", body = DataDto<Vec<RideDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_motorbike_rides(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(motorbike_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rides = RideService::new(&state.db)
        .get_by_motorbike(motorbike_id)
        .await?;

    Ok((StatusCode::OK, Json(rides_dto(rides))))
}

fn rides_dto(rides: Vec<Ride>) -> DataDto<Vec<RideDto>> {
    DataDto::list(rides.into_iter().map(|r| r.into_dto()).collect())
}
