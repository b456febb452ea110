//! Motorbike Rental Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the motorbike
//! rental backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for rental fixtures.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, motorbikes, rides, connections and maps
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Motorbike;
//!
//! #[tokio::test]
//! async fn test_motorbike_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Motorbike)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
