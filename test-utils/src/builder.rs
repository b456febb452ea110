use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Motorbike, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Motorbike)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for account and authentication operations.
    ///
    /// Adds `User` and `RefreshToken`.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(RefreshToken)
    }

    /// Adds the tables required for motorbike registry operations.
    ///
    /// Adds `Motorbike` and `MotorbikePhoto`.
    pub fn with_motorbike_tables(self) -> Self {
        self.with_table(Motorbike).with_table(MotorbikePhoto)
    }

    /// Adds every table used by the rental lifecycle.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User, RefreshToken
    /// - Motorbike, MotorbikePhoto
    /// - BluetoothConnection
    /// - Ride
    /// - Map
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_rental_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_rental_tables(self) -> Self {
        self.with_user_tables()
            .with_motorbike_tables()
            .with_table(BluetoothConnection)
            .with_table(Ride)
            .with_table(Map)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
