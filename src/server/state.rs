//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::jwt::JwtManager, photo::PhotoStorage};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs and validates access and refresh tokens.
    pub jwt: JwtManager,

    /// Storage for uploaded ride photos.
    pub photos: Arc<PhotoStorage>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtManager, photos: PhotoStorage) -> Self {
        Self {
            db,
            jwt,
            photos: Arc::new(photos),
        }
    }
}
