//! Bluetooth connection domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::connection::ConnectionDto,
    server::model::{motorbike::Motorbike, user::User},
};

/// Pairing session between a rider and a motorbike.
///
/// A connection is open while `disconnected_at` is `None`; at most one open connection may
/// exist per motorbike.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: i32,
    pub user_id: i32,
    pub motorbike_id: i32,
    pub connected_at: DateTime<Utc>,
    pub disconnected_at: Option<DateTime<Utc>>,
}

impl Connection {
    pub fn from_entity(entity: entity::bluetooth_connection::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            motorbike_id: entity.motorbike_id,
            connected_at: entity.connected_at,
            disconnected_at: entity.disconnected_at,
        }
    }

    pub fn is_open(&self) -> bool {
        self.disconnected_at.is_none()
    }
}

/// Connection joined with its rider and motorbike for listing endpoints.
#[derive(Debug, Clone)]
pub struct ConnectionDetail {
    pub connection: Connection,
    pub user: User,
    pub motorbike: Motorbike,
}

impl ConnectionDetail {
    pub fn into_dto(self) -> ConnectionDto {
        ConnectionDto {
            id: self.connection.id,
            user_id: self.connection.user_id,
            motorbike_id: self.connection.motorbike_id,
            connected_at: self.connection.connected_at,
            disconnected_at: self.connection.disconnected_at,
            user: self.user.into_summary_dto(),
            motorbike: self.motorbike.into_dto(),
        }
    }
}
