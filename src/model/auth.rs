use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(email, length(max = 64))]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct RefreshTokenDto {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}
