//! JWT token issuance and validation.

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use super::claims::{Claims, ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE};

/// Signed token together with the values needed to persist or report it.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

/// Manages HS256 token creation and validation.
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtManager {
    /// Creates a manager signing with `secret`.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `access_ttl` - Lifetime of access tokens
    /// - `refresh_ttl` - Lifetime of refresh tokens
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Access token lifetime in seconds.
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    pub fn issue_access_token(
        &self,
        user_id: i32,
        role: UserRole,
    ) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        self.issue(user_id, role, self.access_ttl, ACCESS_TOKEN_TYPE)
    }

    /// Issues a refresh token; its `jti` is the ID under which the token must be stored.
    pub fn issue_refresh_token(
        &self,
        user_id: i32,
        role: UserRole,
    ) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        self.issue(user_id, role, self.refresh_ttl, REFRESH_TOKEN_TYPE)
    }

    /// Validates signature and expiry and returns the claims.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }

    fn issue(
        &self,
        user_id: i32,
        role: UserRole,
        ttl: Duration,
        token_type: &str,
    ) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expires_at = now + ttl;
        let jti = uuid::Uuid::new_v4().to_string();

        let claims = Claims {
            jti: jti.clone(),
            sub: user_id.to_string(),
            role: role_name(role).to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            token_type: token_type.to_string(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(IssuedToken {
            token,
            jti,
            expires_at,
        })
    }
}

fn role_name(role: UserRole) -> &'static str {
    match role {
        UserRole::Normal => "normal",
        UserRole::Admin => "admin",
    }
}
