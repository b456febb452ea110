//! Authentication domain models.

use crate::model::auth::TokenPairDto;

/// Freshly issued access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.expires_in,
        }
    }
}
