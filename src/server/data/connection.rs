//! Bluetooth connection data repository.
//!
//! Stores pairing sessions between riders and motorbikes. Listing methods return
//! [`ConnectionDetail`]s with the rider and motorbike loaded in batched queries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::motorbike::MotorbikeRepository,
    model::{
        connection::{Connection, ConnectionDetail},
        user::User,
    },
};

pub struct ConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConnectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a connection at `connected_at`.
    ///
    /// # Returns
    /// - `Ok(Connection)` - The created open connection
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(
        &self,
        user_id: i32,
        motorbike_id: i32,
        connected_at: DateTime<Utc>,
    ) -> Result<Connection, DbErr> {
        let entity = entity::bluetooth_connection::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            motorbike_id: ActiveValue::Set(motorbike_id),
            connected_at: ActiveValue::Set(connected_at),
            disconnected_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Connection::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Connection>, DbErr> {
        let entity = entity::prelude::BluetoothConnection::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Connection::from_entity))
    }

    /// Finds the open connection of a motorbike, if any.
    pub async fn find_open_by_motorbike(
        &self,
        motorbike_id: i32,
    ) -> Result<Option<Connection>, DbErr> {
        let entity = entity::prelude::BluetoothConnection::find()
            .filter(entity::bluetooth_connection::Column::MotorbikeId.eq(motorbike_id))
            .filter(entity::bluetooth_connection::Column::DisconnectedAt.is_null())
            .order_by_desc(entity::bluetooth_connection::Column::ConnectedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Connection::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Connection>, DbErr> {
        let entities = entity::prelude::BluetoothConnection::find()
            .order_by_asc(entity::bluetooth_connection::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Connection::from_entity).collect())
    }

    pub async fn get_by_motorbike(&self, motorbike_id: i32) -> Result<Vec<Connection>, DbErr> {
        let entities = entity::prelude::BluetoothConnection::find()
            .filter(entity::bluetooth_connection::Column::MotorbikeId.eq(motorbike_id))
            .order_by_asc(entity::bluetooth_connection::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Connection::from_entity).collect())
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Connection>, DbErr> {
        let entities = entity::prelude::BluetoothConnection::find()
            .filter(entity::bluetooth_connection::Column::UserId.eq(user_id))
            .order_by_asc(entity::bluetooth_connection::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Connection::from_entity).collect())
    }

    /// Closes an open connection.
    ///
    /// Only a connection that is still open is touched, so closing twice is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Connection closed
    /// - `Ok(false)` - Connection absent or already closed
    pub async fn close(&self, id: i32, disconnected_at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::BluetoothConnection::update_many()
            .col_expr(
                entity::bluetooth_connection::Column::DisconnectedAt,
                sea_orm::sea_query::Expr::value(disconnected_at),
            )
            .filter(entity::bluetooth_connection::Column::Id.eq(id))
            .filter(entity::bluetooth_connection::Column::DisconnectedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Closes every open connection of a motorbike.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of connections closed, zero when none was open
    pub async fn close_open_for_motorbike(
        &self,
        motorbike_id: i32,
        disconnected_at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::BluetoothConnection::update_many()
            .col_expr(
                entity::bluetooth_connection::Column::DisconnectedAt,
                sea_orm::sea_query::Expr::value(disconnected_at),
            )
            .filter(entity::bluetooth_connection::Column::MotorbikeId.eq(motorbike_id))
            .filter(entity::bluetooth_connection::Column::DisconnectedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Hard-deletes a connection row.
    ///
    /// # Returns
    /// - `Ok(true)` - Connection deleted
    /// - `Ok(false)` - No connection with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BluetoothConnection::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the rider and motorbike of each connection.
    ///
    /// Users and motorbikes are fetched with one query each. Connections whose rider or
    /// motorbike row no longer exists are skipped.
    pub async fn load_details(
        &self,
        connections: Vec<Connection>,
    ) -> Result<Vec<ConnectionDetail>, DbErr> {
        if connections.is_empty() {
            return Ok(Vec::new());
        }

        let mut user_ids: Vec<i32> = connections.iter().map(|c| c.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let mut motorbike_ids: Vec<i32> = connections.iter().map(|c| c.motorbike_id).collect();
        motorbike_ids.sort_unstable();
        motorbike_ids.dedup();

        let users: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| (entity.id, User::from_entity(entity)))
            .collect();

        let motorbikes: HashMap<i32, _> = MotorbikeRepository::new(self.db)
            .get_by_ids(motorbike_ids)
            .await?
            .into_iter()
            .map(|motorbike| (motorbike.id, motorbike))
            .collect();

        Ok(connections
            .into_iter()
            .filter_map(|connection| {
                let user = users.get(&connection.user_id)?.clone();
                let motorbike = motorbikes.get(&connection.motorbike_id)?.clone();
                Some(ConnectionDetail {
                    connection,
                    user,
                    motorbike,
                })
            })
            .collect())
    }
}
