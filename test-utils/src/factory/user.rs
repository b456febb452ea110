//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("rider@example.com")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    username: String,
    email: String,
    phone: Option<String>,
    password: String,
    role: UserRole,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - phone: `None`
    /// - password: a placeholder that never verifies
    /// - role: `UserRole::Normal`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: "Test".to_string(),
            surname: format!("Rider {}", id),
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            phone: None,
            password: "unusable-password-hash".to_string(),
            role: UserRole::Normal,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the stored password hash verbatim.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = hash.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a normal user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}
