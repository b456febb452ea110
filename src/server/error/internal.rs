use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash or parse a password hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to process password hash: {0}")]
    PasswordHash(String),

    /// Signing a JWT failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),
}
