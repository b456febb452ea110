//! HTTP handlers.
//!
//! Handlers authenticate with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into domain params, call a service and wrap the result in
//! [`DataDto`](crate::model::api::DataDto).

pub mod auth;
pub mod connection;
pub mod health;
pub mod map;
pub mod motorbike;
pub mod param;
pub mod ride;
pub mod user;
