//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! creation, lookups by ID and email, profile updates, deletion, and the uniqueness
//! checks used before an update is applied.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Normalized user fields including the password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations on
    ///   username, email, or phone
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            surname: ActiveValue::Set(param.surname),
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// The lookup is exact; callers normalize the address first.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Replaces a user's profile fields.
    ///
    /// Role and password are only written when the parameter carries a value.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `param` - New profile values
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let existing = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active: entity::user::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.surname = ActiveValue::Set(param.surname);
        active.username = ActiveValue::Set(param.username);
        active.email = ActiveValue::Set(param.email);
        active.phone = ActiveValue::Set(param.phone);
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role);
        }
        if let Some(password_hash) = param.password_hash {
            active.password = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user and, through cascading foreign keys, their tokens, connections and rides.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether an email address is held by any user other than `exclude_id`.
    pub async fn email_in_use(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.value_in_use(entity::user::Column::Email, email, exclude_id)
            .await
    }

    /// Checks whether a username is held by any user other than `exclude_id`.
    pub async fn username_in_use(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        self.value_in_use(entity::user::Column::Username, username, exclude_id)
            .await
    }

    /// Checks whether a phone number is held by any user other than `exclude_id`.
    pub async fn phone_in_use(&self, phone: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.value_in_use(entity::user::Column::Phone, phone, exclude_id)
            .await
    }

    async fn value_in_use(
        &self,
        column: entity::user::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
