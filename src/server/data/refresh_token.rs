//! Stored refresh tokens.
//!
//! A refresh token is valid only while its row exists and has not expired. Rotation deletes
//! the presented row and inserts a new one; logout deletes every row of the user.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct RefreshTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RefreshTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a newly issued refresh token.
    ///
    /// # Arguments
    /// - `token_id` - Unique token identifier, embedded in the JWT as `jti`
    /// - `user_id` - Owner of the token
    /// - `role` - Role of the owner at issue time
    /// - `expires_at` - Expiry matching the JWT `exp` claim
    pub async fn create(
        &self,
        token_id: String,
        user_id: i32,
        role: UserRole,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            token_id: ActiveValue::Set(token_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role),
            expires_at: ActiveValue::Set(expires_at),
        }
        .insert(self.db)
        .await
    }

    /// Finds a stored token that has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Token exists and is still valid
    /// - `Ok(None)` - Token unknown, revoked, or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid(
        &self,
        token_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find_by_id(token_id.to_string())
            .filter(entity::refresh_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Deletes a single token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token deleted
    /// - `Ok(false)` - Token did not exist
    pub async fn delete(&self, token_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::RefreshToken::delete_by_id(token_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every token belonging to a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tokens deleted
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::delete_many()
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
