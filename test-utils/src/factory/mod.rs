//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the identifiers of the rows they reference,
//! and `helpers` offers shortcuts that create the whole dependency chain.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let motorbike = factory::create_motorbike(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, motorbike, ride) = factory::helpers::create_ride_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};
//! use test_utils::factory;
//!
//! let motorbike = factory::motorbike::MotorbikeFactory::new(&db)
//!     .status(MotorbikeStatus::Rented)
//!     .lock_status(LockStatus::Locked)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `motorbike` - Create motorbike entities and their photos
//! - `connection` - Create bluetooth connection entities
//! - `ride` - Create ride entities
//! - `map` - Create map entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod connection;
pub mod helpers;
pub mod map;
pub mod motorbike;
pub mod ride;
pub mod user;

pub use connection::create_connection;
pub use map::create_map;
pub use motorbike::create_motorbike;
pub use ride::create_ride;
pub use user::{create_admin, create_user};
