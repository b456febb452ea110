use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        connection::{ConnectDto, ConnectionDto},
    },
    server::{
        controller::param::ValidJson,
        error::AppError,
        middleware::auth::{acting_user_id, AuthGuard, Permission},
        service::connection::ConnectionService,
        state::AppState,
    },
};

/// Tag for grouping bluetooth connection endpoints in OpenAPI documentation
pub static CONNECTION_TAG: &str = "connection";

/// Pair a rider with a motorbike over bluetooth.
///
/// The rider defaults to the caller; admins may pair on behalf of another user.
///
/// # Returns
/// - `201 Created` - The open connection with rider and motorbike
/// - `403 Forbidden` - A normal user named another rider
/// - `404 Not Found` - Motorbike or user absent
/// - `409 Conflict` - Motorbike not available or already paired
#[utoipa::path(
    post,
    path = "/api/connection/connect",
    tag = CONNECTION_TAG,
    request_body = ConnectDto,
    responses(
        (status = 201, description = "Connection opened", body = DataDto<ConnectionDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Cannot connect on behalf of another user", body = ErrorDto),
        (status = 404, description = "Motorbike or user not found", body = ErrorDto),
        (status = 409, description = "Motorbike not available or already connected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn connect(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<ConnectDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;
    let user_id = acting_user_id(&caller, payload.user_id)?;

    let detail = ConnectionService::new(&state.db)
        .connect(user_id, payload.motorbike_id)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::one(detail.into_dto()))))
}

/// Close the open connection of a motorbike.
///
/// Makes the motorbike available again. The ride photo upload performs the same step
/// automatically.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The closed connection
/// - `400 Bad Request` - The motorbike has no open connection
/// - `404 Not Found` - Motorbike absent
#[utoipa::path(
    put,
    path = "/api/connection/disconnect/{motorbike_id}",
    tag = CONNECTION_TAG,
    params(("motorbike_id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Connection closed", body = DataDto<ConnectionDto>),
        (status = 400, description = "No open connection", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Motorbike not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn disconnect(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(motorbike_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ConnectionService::new(&state.db);
    let closed = service.disconnect(motorbike_id).await?;
    let detail = service.get_by_id(closed.id).await?;

    Ok((StatusCode::OK, Json(DataDto::one(detail.into_dto()))))
}

/// List every connection.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/connections",
    tag = CONNECTION_TAG,
    responses(
        (status = 200, description = "All connections", body = DataDto<Vec<ConnectionDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_connections(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let connections = ConnectionService::new(&state.db).get_all().await?;
    let connections_dto: Vec<_> = connections.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(connections_dto))))
}

#[utoipa::path(
    get,
    path = "/api/connection/{id}",
    tag = CONNECTION_TAG,
    params(("id" = i32, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Connection", body = DataDto<ConnectionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_connection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let detail = ConnectionService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::one(detail.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/connection/motorbike/{motorbike_id}",
    tag = CONNECTION_TAG,
    params(("motorbike_id" = i32, Path, description = "Motorbike ID")),
    responses(
        (status = 200, description = "Connections of the motorbike", body = DataDto<Vec<ConnectionDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_motorbike_connections(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(motorbike_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let connections = ConnectionService::new(&state.db)
        .get_by_motorbike(motorbike_id)
        .await?;
    let connections_dto: Vec<_> = connections.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(connections_dto))))
}

/// List the connections of a user.
///
/// # Access Control
/// - `SelfOrAdmin` - Users see their own connections, admins see anyone's
#[utoipa::path(
    get,
    path = "/api/connection/user/{user_id}",
    tag = CONNECTION_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Connections of the user", body = DataDto<Vec<ConnectionDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_connections(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let connections = ConnectionService::new(&state.db)
        .get_by_user(user_id)
        .await?;
    let connections_dto: Vec<_> = connections.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(connections_dto))))
}

/// Delete a connection record.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/connection/{id}",
    tag = CONNECTION_TAG,
    params(("id" = i32, Path, description = "Connection ID")),
    responses(
        (status = 204, description = "Connection deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Connection not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    ConnectionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
