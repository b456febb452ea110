//! Bluetooth connection factory for creating test connection entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bluetooth connections.
///
/// The referenced user and motorbike must already exist.
pub struct ConnectionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    motorbike_id: i32,
    connected_at: DateTime<Utc>,
    disconnected_at: Option<DateTime<Utc>>,
}

impl<'a> ConnectionFactory<'a> {
    /// Creates a new ConnectionFactory for an open connection established now.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, motorbike_id: i32) -> Self {
        Self {
            db,
            user_id,
            motorbike_id,
            connected_at: Utc::now(),
            disconnected_at: None,
        }
    }

    pub fn connected_at(mut self, connected_at: DateTime<Utc>) -> Self {
        self.connected_at = connected_at;
        self
    }

    /// Marks the connection as already closed at the given time.
    pub fn disconnected_at(mut self, disconnected_at: DateTime<Utc>) -> Self {
        self.disconnected_at = Some(disconnected_at);
        self
    }

    /// Builds and inserts the connection entity into the database.
    pub async fn build(self) -> Result<entity::bluetooth_connection::Model, DbErr> {
        entity::bluetooth_connection::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            motorbike_id: ActiveValue::Set(self.motorbike_id),
            connected_at: ActiveValue::Set(self.connected_at),
            disconnected_at: ActiveValue::Set(self.disconnected_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open connection for the given user and motorbike.
pub async fn create_connection(
    db: &DatabaseConnection,
    user_id: i32,
    motorbike_id: i32,
) -> Result<entity::bluetooth_connection::Model, DbErr> {
    ConnectionFactory::new(db, user_id, motorbike_id).build().await
}
