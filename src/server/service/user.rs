//! Account management service.
//!
//! Registers users and admins, serves profile reads, and applies profile updates after
//! checking that email, username and phone stay unique.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateMeDto, UpdateUserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::auth::password::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a normal user.
    pub async fn register(&self, dto: CreateUserDto) -> Result<User, AppError> {
        self.create(dto, UserRole::Normal).await
    }

    /// Creates a user with the admin role.
    pub async fn create_admin(&self, dto: CreateUserDto) -> Result<User, AppError> {
        self.create(dto, UserRole::Admin).await
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Applies an admin update to any account.
    ///
    /// An absent or empty password keeps the stored hash.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Email, username or phone belongs to another user
    pub async fn update_by_id(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        self.get_by_id(id).await?;

        let password_hash = hash_optional_password(dto.password.as_deref())?;
        let param = UpdateUserParam::from_dto(dto, password_hash);

        self.update(id, param).await
    }

    /// Applies a self-service profile update. The role is never changed.
    pub async fn update_me(&self, user_id: i32, dto: UpdateMeDto) -> Result<User, AppError> {
        self.get_by_id(user_id).await?;

        let password_hash = hash_optional_password(dto.password.as_deref())?;
        let param = UpdateUserParam::from_me_dto(dto, password_hash);

        self.update(user_id, param).await
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    async fn create(&self, dto: CreateUserDto, role: UserRole) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password)?;
        let param = CreateUserParam::from_dto(dto, role, password_hash);

        let repo = UserRepository::new(self.db);
        ensure_unique(
            &repo,
            &param.email,
            &param.username,
            param.phone.as_deref(),
            None,
        )
        .await?;

        let user = repo.create(param).await?;

        tracing::info!("Created user {} with role {:?}", user.id, user.role);

        Ok(user)
    }

    async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        ensure_unique(
            &repo,
            &param.email,
            &param.username,
            param.phone.as_deref(),
            Some(id),
        )
        .await?;

        Ok(repo.update(id, param).await?)
    }
}

fn hash_optional_password(password: Option<&str>) -> Result<Option<String>, AppError> {
    match password.filter(|p| !p.is_empty()) {
        Some(password) => Ok(Some(hash_password(password)?)),
        None => Ok(None),
    }
}

async fn ensure_unique(
    repo: &UserRepository<'_, DatabaseConnection>,
    email: &str,
    username: &str,
    phone: Option<&str>,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    if repo.email_in_use(email, exclude_id).await? {
        return Err(AppError::BadRequest("Email is already in use".to_string()));
    }
    if repo.username_in_use(username, exclude_id).await? {
        return Err(AppError::BadRequest("Username is already in use".to_string()));
    }
    if let Some(phone) = phone {
        if repo.phone_in_use(phone, exclude_id).await? {
            return Err(AppError::BadRequest(
                "Phone number is already in use".to_string(),
            ));
        }
    }

    Ok(())
}
