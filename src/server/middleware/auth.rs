use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::jwt::JwtManager,
};

pub enum Permission {
    /// Caller must hold the admin role.
    Admin,
    /// Caller must be the given user or an admin.
    SelfOrAdmin(i32),
}

impl Permission {
    /// Checks the permission against an already authenticated user.
    ///
    /// Used directly by handlers that must load a resource before its owner is known.
    pub fn check(&self, user: &User) -> Result<(), AuthError> {
        match self {
            Self::Admin => {
                if !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        "User attempted an admin action without the admin role".to_string(),
                    ));
                }
            }
            Self::SelfOrAdmin(owner_id) => {
                if user.id != *owner_id && !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!("User attempted to access resources of user {}", owner_id),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Resolves the caller of a request from its bearer access token.
///
/// The token must be a valid, unexpired access token whose subject still exists in the
/// database. Permissions are then checked in order and the first failure is returned.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtManager,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtManager, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the caller and checks the given permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must satisfy; empty means any signed-in user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token on the request
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token invalid, expired or not an access token
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Token subject was deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = self
            .jwt
            .validate(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        if !claims.is_access() {
            return Err(AuthError::InvalidToken("not an access token".to_string()).into());
        }
        let Some(user_id) = claims.user_id() else {
            return Err(AuthError::InvalidToken(format!("bad subject {}", claims.sub)).into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            permission.check(&user)?;
        }

        Ok(user)
    }
}

/// Resolves the user a request acts on behalf of.
///
/// Defaults to the caller; naming another user requires the admin role.
pub fn acting_user_id(caller: &User, requested: Option<i32>) -> Result<i32, AuthError> {
    let target = requested.unwrap_or(caller.id);
    Permission::SelfOrAdmin(target).check(caller)?;

    Ok(target)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
