use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        user::{CreateUserDto, UpdateMeDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::param::ValidJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new rider account.
///
/// Public endpoint. The account always receives the normal role.
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid data, or email/username/phone already in use
#[utoipa::path(
    post,
    path = "/api/user/create",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = DataDto<UserDto>),
        (status = 400, description = "Invalid data or duplicate account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::one(user.into_dto()))))
}

/// Create an admin account.
///
/// # Access Control
/// - `Admin` - Only admins can create other admins
#[utoipa::path(
    post,
    path = "/api/user/admin",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Admin created", body = DataDto<UserDto>),
        (status = 400, description = "Invalid data or duplicate account", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).create_admin(payload).await?;

    Ok((StatusCode::CREATED, Json(DataDto::one(user.into_dto()))))
}

/// Get the profile of the caller.
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Own profile", body = DataDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(user.into_dto()))))
}

/// Update the profile of the caller.
///
/// The role cannot be changed here. An absent or empty password keeps the current one.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Invalid data, or email/username/phone used by another account
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    put,
    path = "/api/user/me",
    tag = USER_TAG,
    request_body = UpdateMeDto,
    responses(
        (status = 200, description = "Profile updated", body = DataDto<UserDto>),
        (status = 400, description = "Invalid data or duplicate account", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<UpdateMeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .update_me(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(updated.into_dto()))))
}

/// List all accounts.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = DataDto<Vec<UserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;
    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::list(users_dto))))
}

/// Get an account by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account", body = DataDto<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataDto::one(user.into_dto()))))
}

/// Update any account, including its role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated account
/// - `400 Bad Request` - Invalid data, or email/username/phone used by another account
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = DataDto<UserDto>),
        (status = 400, description = "Invalid data or duplicate account", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).update_by_id(id, payload).await?;

    Ok((StatusCode::OK, Json(DataDto::one(user.into_dto()))))
}

/// Delete an account.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
