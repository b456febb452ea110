//! JWT claims carried by access and refresh tokens.

use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Token ID. For refresh tokens this is the primary key of the stored row.
    pub jti: String,
    /// Subject (user ID).
    pub sub: String,
    /// Role at issue time, `"normal"` or `"admin"`.
    pub role: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
    #[serde(rename = "typ")]
    pub token_type: String,
}

impl Claims {
    pub fn is_access(&self) -> bool {
        self.token_type == ACCESS_TOKEN_TYPE
    }

    pub fn is_refresh(&self) -> bool {
        self.token_type == REFRESH_TOKEN_TYPE
    }

    /// Parses the subject into a user ID.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}
