use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleDto {
    Normal,
    Admin,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRoleDto,
    pub created_at: DateTime<Utc>,
}

/// Reduced user projection embedded in connection listings.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub phone: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email, length(max = 64))]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub surname: String,
    #[validate(length(min = 1, max = 20))]
    pub username: String,
    #[validate(length(min = 3, max = 100))]
    pub password: String,
}

/// Admin update of any account. An absent or empty password keeps the current one.
#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email, length(max = 64))]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub surname: String,
    #[validate(length(min = 1, max = 20))]
    pub username: String,
    pub role: UserRoleDto,
    #[validate(length(max = 100))]
    pub password: Option<String>,
}

/// Self-service profile update; the role cannot be changed here.
#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateMeDto {
    #[validate(email, length(max = 64))]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub surname: String,
    #[validate(length(min = 1, max = 20))]
    pub username: String,
    #[validate(length(max = 100))]
    pub password: Option<String>,
}
