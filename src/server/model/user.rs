//! User domain models and parameters.
//!
//! Provides the account domain model and the parameter types used when registering users
//! and updating profiles. Input normalization (email casing, phone digits, title-cased names)
//! happens when parameters are built from DTOs.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{
        CreateUserDto, UpdateMeDto, UpdateUserDto, UserDto, UserRoleDto, UserSummaryDto,
    },
    server::util::text::{normalize_email, normalize_phone, title_case},
};

/// Registered account with role and stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    /// Argon2 PHC string; never leaves the server.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            username: entity.username,
            email: entity.email,
            phone: entity.phone,
            role: entity.role,
            password_hash: entity.password,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            username: self.username,
            email: self.email,
            phone: self.phone,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }

    /// Converts into the reduced projection used inside connection listings.
    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            username: self.username,
            phone: self.phone,
        }
    }
}

impl From<UserRoleDto> for UserRole {
    fn from(dto: UserRoleDto) -> Self {
        match dto {
            UserRoleDto::Normal => UserRole::Normal,
            UserRoleDto::Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Normal => UserRoleDto::Normal,
            UserRole::Admin => UserRoleDto::Admin,
        }
    }
}

/// Parameters for creating a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}

impl CreateUserParam {
    /// Builds normalized creation parameters from a registration DTO.
    ///
    /// # Arguments
    /// - `dto` - Validated registration payload
    /// - `role` - Role to assign (normal for public registration, admin for admin creation)
    /// - `password_hash` - Argon2 hash of `dto.password`
    pub fn from_dto(dto: CreateUserDto, role: UserRole, password_hash: String) -> Self {
        Self {
            name: title_case(&dto.name),
            surname: title_case(&dto.surname),
            username: dto.username.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: normalize_phone(dto.phone.as_deref()),
            password_hash,
            role,
        }
    }
}

/// Parameters for updating an existing account.
///
/// `None` for `role` or `password_hash` leaves the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub password_hash: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto, password_hash: Option<String>) -> Self {
        Self {
            name: title_case(&dto.name),
            surname: title_case(&dto.surname),
            username: dto.username.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: normalize_phone(dto.phone.as_deref()),
            role: Some(dto.role.into()),
            password_hash,
        }
    }

    pub fn from_me_dto(dto: UpdateMeDto, password_hash: Option<String>) -> Self {
        Self {
            name: title_case(&dto.name),
            surname: title_case(&dto.surname),
            username: dto.username.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: normalize_phone(dto.phone.as_deref()),
            role: None,
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_registration_input() {
        let param = CreateUserParam::from_dto(
            CreateUserDto {
                email: "  Rider@Example.COM ".to_string(),
                phone: Some("(555) 123-4567".to_string()),
                name: "aYşe".to_string(),
                surname: "van der berg".to_string(),
                username: " rider1 ".to_string(),
                password: "secret".to_string(),
            },
            UserRole::Normal,
            "hash".to_string(),
        );

        assert_eq!(param.email, "rider@example.com");
        assert_eq!(param.phone.as_deref(), Some("5551234567"));
        assert_eq!(param.name, "Ayşe");
        assert_eq!(param.surname, "Van Der Berg");
        assert_eq!(param.username, "rider1");
    }

    #[test]
    fn self_update_never_changes_role() {
        let param = UpdateUserParam::from_me_dto(
            UpdateMeDto {
                email: "a@b.co".to_string(),
                phone: None,
                name: "a".to_string(),
                surname: "b".to_string(),
                username: "ab".to_string(),
                password: None,
            },
            None,
        );

        assert!(param.role.is_none());
        assert!(param.password_hash.is_none());
    }
}
