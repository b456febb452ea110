//! Bluetooth connection tracker.
//!
//! Opens pairing sessions on available motorbikes and closes them again. Closing the open
//! connection of a motorbike always releases the motorbike back to `Available`; the same
//! routine is used by the admin disconnect endpoint and by the ride photo step.

use chrono::Utc;
use entity::sea_orm_active_enums::MotorbikeStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        connection::ConnectionRepository, motorbike::MotorbikeRepository, user::UserRepository,
    },
    error::{rental::RentalError, AppError},
    model::connection::{Connection, ConnectionDetail},
};

pub struct ConnectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConnectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a connection between a rider and a motorbike.
    ///
    /// The motorbike status is left untouched.
    ///
    /// # Returns
    /// - `Ok(ConnectionDetail)` - The open connection with rider and motorbike
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Motorbike absent
    /// - `Err(AppError::NotFound)` - User absent
    /// - `Err(AppError::RentalErr(ConnectionUnavailable))` - Motorbike not `Available` (409)
    /// - `Err(AppError::RentalErr(ConnectionAlreadyOpen))` - Motorbike already paired (409)
    pub async fn connect(
        &self,
        user_id: i32,
        motorbike_id: i32,
    ) -> Result<ConnectionDetail, AppError> {
        let txn = self.db.begin().await?;

        let Some(motorbike) = MotorbikeRepository::new(&txn)
            .find_by_id(motorbike_id)
            .await?
        else {
            return Err(RentalError::MotorbikeNotFound(motorbike_id).into());
        };

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        if !motorbike.is_available() {
            return Err(RentalError::ConnectionUnavailable {
                id: motorbike_id,
                status: motorbike.status,
            }
            .into());
        }

        let repo = ConnectionRepository::new(&txn);
        if repo.find_open_by_motorbike(motorbike_id).await?.is_some() {
            return Err(RentalError::ConnectionAlreadyOpen(motorbike_id).into());
        }

        let connection = repo.create(user_id, motorbike_id, Utc::now()).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} connected to motorbike {} (connection {})",
            user_id,
            motorbike_id,
            connection.id
        );

        self.get_by_id(connection.id).await
    }

    /// Closes the open connection of a motorbike and makes the motorbike available.
    ///
    /// # Returns
    /// - `Ok(Connection)` - The closed connection
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Motorbike absent
    /// - `Err(AppError::RentalErr(NoOpenConnection))` - Nothing to close (400)
    pub async fn disconnect(&self, motorbike_id: i32) -> Result<Connection, AppError> {
        let txn = self.db.begin().await?;

        if MotorbikeRepository::new(&txn)
            .find_by_id(motorbike_id)
            .await?
            .is_none()
        {
            return Err(RentalError::MotorbikeNotFound(motorbike_id).into());
        }

        let connection = close_open_connection(&txn, motorbike_id).await?;
        txn.commit().await?;

        Ok(connection)
    }

    pub async fn get_all(&self) -> Result<Vec<ConnectionDetail>, AppError> {
        let repo = ConnectionRepository::new(self.db);
        let connections = repo.get_all().await?;

        Ok(repo.load_details(connections).await?)
    }

    /// Gets one connection with its rider and motorbike.
    ///
    /// # Returns
    /// - `Ok(ConnectionDetail)` - Connection found
    /// - `Err(AppError::NotFound)` - No connection with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<ConnectionDetail, AppError> {
        let repo = ConnectionRepository::new(self.db);
        let connection = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Connection {} not found", id)))?;

        repo.load_details(vec![connection])
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Connection {} not found", id)))
    }

    pub async fn get_by_motorbike(
        &self,
        motorbike_id: i32,
    ) -> Result<Vec<ConnectionDetail>, AppError> {
        let repo = ConnectionRepository::new(self.db);
        let connections = repo.get_by_motorbike(motorbike_id).await?;

        Ok(repo.load_details(connections).await?)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ConnectionDetail>, AppError> {
        let repo = ConnectionRepository::new(self.db);
        let connections = repo.get_by_user(user_id).await?;

        Ok(repo.load_details(connections).await?)
    }

    /// Hard-deletes a connection row.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ConnectionRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Connection {} not found", id)));
        }

        Ok(())
    }
}

/// Closes the open connection of `motorbike_id` and sets the motorbike `Available`.
///
/// Runs on whatever connection or transaction the caller passes so it can be part of a
/// larger workflow step.
///
/// # Returns
/// - `Ok(Connection)` - The connection as closed
/// - `Err(AppError::RentalErr(NoOpenConnection))` - The motorbike has no open connection
pub async fn close_open_connection<C: ConnectionTrait>(
    db: &C,
    motorbike_id: i32,
) -> Result<Connection, AppError> {
    let repo = ConnectionRepository::new(db);

    let Some(mut connection) = repo.find_open_by_motorbike(motorbike_id).await? else {
        return Err(RentalError::NoOpenConnection(motorbike_id).into());
    };

    let now = Utc::now();
    if !repo.close(connection.id, now).await? {
        return Err(RentalError::NoOpenConnection(motorbike_id).into());
    }
    connection.disconnected_at = Some(now);

    MotorbikeRepository::new(db)
        .set_status(motorbike_id, MotorbikeStatus::Available)
        .await?;

    tracing::info!(
        "Closed connection {} and released motorbike {}",
        connection.id,
        motorbike_id
    );

    Ok(connection)
}
