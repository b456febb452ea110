//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against the pooled connection or inside a transaction opened by a service.

pub mod connection;
pub mod map;
pub mod motorbike;
pub mod refresh_token;
pub mod ride;
pub mod user;

#[cfg(test)]
mod test;
