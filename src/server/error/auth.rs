use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request did not carry an `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Access token failed signature, expiry or type validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Refresh token is malformed, expired, or no longer stored.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Email is unknown or the password does not match.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token subject no longer exists in the database.
    #[error("User {0} referenced by token not found")]
    UserNotInDatabase(i32),

    /// User is authenticated but lacks the required role or ownership.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Server-side description of the attempted action
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All failures to establish identity map to 401 with a generic message; authorization
/// failures map to 403. Details are logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::InvalidRefreshToken
            | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
