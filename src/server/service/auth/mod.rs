//! Authentication service.
//!
//! Verifies credentials, issues access/refresh token pairs, rotates refresh tokens and
//! revokes them on logout. Refresh tokens are only honoured while their row exists in the
//! `refresh_token` table.

pub mod claims;
pub mod jwt;
pub mod password;

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{refresh_token::RefreshTokenRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{auth::TokenPair, user::User},
    util::text::normalize_email,
};

use self::jwt::JwtManager;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtManager,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtManager) -> Self {
        Self { db, jwt }
    }

    /// Logs a user in with email and password.
    ///
    /// # Returns
    /// - `Ok((TokenPair, User))` - Issued tokens and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<(TokenPair, User), AppError> {
        let user = self.authenticate(email, password).await?;
        let tokens = self.issue_pair(self.db, &user).await?;

        tracing::info!("User {} logged in", user.id);

        Ok((tokens, user))
    }

    /// Logs a user into the admin panel.
    ///
    /// Identical to [`AuthService::login`] but refuses non-admin accounts before any token
    /// is stored.
    ///
    /// # Returns
    /// - `Ok((TokenPair, User))` - Issued tokens and the authenticated admin
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::AuthErr(AccessDenied))` - Valid credentials without the admin role
    pub async fn login_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(TokenPair, User), AppError> {
        let user = self.authenticate(email, password).await?;

        if !user.is_admin() {
            return Err(AuthError::AccessDenied(
                user.id,
                "Attempted admin panel login without admin role".to_string(),
            )
            .into());
        }

        let tokens = self.issue_pair(self.db, &user).await?;

        tracing::info!("Admin {} logged in", user.id);

        Ok((tokens, user))
    }

    /// Exchanges a refresh token for a new token pair.
    ///
    /// The presented token's row is deleted and the new refresh token stored in the same
    /// transaction, so each refresh token can be used once.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Newly issued tokens
    /// - `Err(AppError::AuthErr(InvalidRefreshToken))` - Token invalid, expired, not a refresh
    ///   token, or already used/revoked
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Owner of the token no longer exists
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self
            .jwt
            .validate(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        if !claims.is_refresh() {
            return Err(AuthError::InvalidRefreshToken.into());
        }

        let txn = self.db.begin().await?;
        let token_repo = RefreshTokenRepository::new(&txn);

        let Some(stored) = token_repo.find_valid(&claims.jti, Utc::now()).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };
        token_repo.delete(&stored.token_id).await?;

        let Some(user) = UserRepository::new(&txn).find_by_id(stored.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(stored.user_id).into());
        };

        let tokens = self.issue_pair(&txn, &user).await?;
        txn.commit().await?;

        Ok(tokens)
    }

    /// Revokes every refresh token of a user.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        let revoked = RefreshTokenRepository::new(self.db)
            .delete_by_user(user_id)
            .await?;

        tracing::info!("User {} logged out, {} refresh tokens revoked", user_id, revoked);

        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&normalize_email(email))
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    async fn issue_pair<C: ConnectionTrait>(
        &self,
        db: &C,
        user: &User,
    ) -> Result<TokenPair, AppError> {
        let access = self
            .jwt
            .issue_access_token(user.id, user.role)
            .map_err(InternalError::TokenEncoding)?;
        let refresh = self
            .jwt
            .issue_refresh_token(user.id, user.role)
            .map_err(InternalError::TokenEncoding)?;

        RefreshTokenRepository::new(db)
            .create(refresh.jti, user.id, user.role, refresh.expires_at)
            .await?;

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
            expires_in: self.jwt.access_ttl_secs(),
        })
    }
}
