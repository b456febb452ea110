//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an open ride together with the user and motorbike it references.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, motorbike, ride))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ride_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::motorbike::Model,
        entity::ride::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let motorbike = crate::factory::motorbike::create_motorbike(db).await?;
    let ride = crate::factory::ride::create_ride(db, user.id, motorbike.id).await?;

    Ok((user, motorbike, ride))
}

/// Creates an open bluetooth connection together with the user and motorbike it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, motorbike, connection))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_connection_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::motorbike::Model,
        entity::bluetooth_connection::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let motorbike = crate::factory::motorbike::create_motorbike(db).await?;
    let connection =
        crate::factory::connection::create_connection(db, user.id, motorbike.id).await?;

    Ok((user, motorbike, connection))
}
