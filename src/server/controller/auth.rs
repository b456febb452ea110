use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        auth::{LoginDto, RefreshTokenDto, TokenPairDto},
    },
    server::{
        controller::param::ValidJson, error::AppError, middleware::auth::AuthGuard,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Issues an access token and a refresh token. The refresh token is stored server-side
/// and can be exchanged exactly once.
///
/// # Returns
/// - `200 OK` - Token pair
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = DataDto<TokenPairDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (tokens, _) = AuthService::new(&state.db, &state.jwt)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(tokens.into_dto()))))
}

/// Log into the admin panel.
///
/// Same as the regular login but refuses accounts without the admin role.
///
/// # Returns
/// - `200 OK` - Token pair
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account is not an admin
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = DataDto<TokenPairDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (tokens, _) = AuthService::new(&state.db, &state.jwt)
        .login_admin(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(tokens.into_dto()))))
}

/// Exchange a refresh token for a new token pair.
///
/// The presented refresh token is revoked.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "New token pair", body = DataDto<TokenPairDto>),
        (status = 401, description = "Refresh token invalid, expired or already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::one(tokens.into_dto()))))
}

/// Revoke every refresh token of the caller.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.jwt)
        .logout(user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
