//! Motorbike registry service.
//!
//! CRUD over motorbikes plus the admin status and lock-status endpoints. Lock changes are
//! fed through the ride lifecycle of the motorbike's open ride, if any.

use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{motorbike::MotorbikeRepository, ride::RideRepository},
    error::{rental::RentalError, AppError},
    model::{
        motorbike::{
            status_change_allowed, CreateMotorbikeParam, Motorbike, MotorbikePhoto,
            UpdateMotorbikeParam,
        },
        ride::RideEvent,
    },
};

pub struct MotorbikeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotorbikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMotorbikeParam) -> Result<Motorbike, AppError> {
        let motorbike = MotorbikeRepository::new(self.db).create(param).await?;

        tracing::info!("Registered motorbike {}", motorbike.id);

        Ok(motorbike)
    }

    /// Gets a motorbike by ID.
    ///
    /// # Returns
    /// - `Ok(Motorbike)` - Motorbike with photos
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Absent or soft-deleted
    pub async fn get_by_id(&self, id: i32) -> Result<Motorbike, AppError> {
        MotorbikeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| RentalError::MotorbikeNotFound(id).into())
    }

    pub async fn get_all(&self) -> Result<Vec<Motorbike>, AppError> {
        Ok(MotorbikeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_status(&self, status: MotorbikeStatus) -> Result<Vec<Motorbike>, AppError> {
        Ok(MotorbikeRepository::new(self.db)
            .get_by_status(status)
            .await?)
    }

    /// Gets the photos of a motorbike in insertion order.
    pub async fn get_photos(&self, id: i32) -> Result<Vec<MotorbikePhoto>, AppError> {
        self.get_by_id(id).await?;

        Ok(MotorbikeRepository::new(self.db).get_photos(id).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateMotorbikeParam) -> Result<Motorbike, AppError> {
        self.get_by_id(id).await?;

        Ok(MotorbikeRepository::new(self.db).update(id, param).await?)
    }

    /// Overwrites the availability status.
    ///
    /// The write is last-writer-wins. Changes that the rental workflow would not make
    /// itself (anything entering or leaving `Rented`) are logged as warnings.
    pub async fn update_status(
        &self,
        id: i32,
        status: MotorbikeStatus,
    ) -> Result<Motorbike, AppError> {
        let current = self.get_by_id(id).await?;

        if !status_change_allowed(current.status, status) {
            tracing::warn!(
                "Motorbike {} manually moved from {:?} to {:?} outside the rental workflow",
                id,
                current.status,
                status
            );
        }

        Ok(MotorbikeRepository::new(self.db)
            .set_status(id, status)
            .await?)
    }

    /// Overwrites the lock status, as reported by the motorbike's lock.
    ///
    /// The previous lock status, the write and the open-ride lookup share one transaction.
    /// When the motorbike has an open ride the change is applied to that ride's lifecycle
    /// and the resulting phase is logged.
    ///
    /// # Returns
    /// - `Ok(Motorbike)` - Motorbike with the new lock status
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Absent or soft-deleted
    pub async fn update_lock_status(
        &self,
        id: i32,
        lock_status: LockStatus,
    ) -> Result<Motorbike, AppError> {
        let txn = self.db.begin().await?;

        let repo = MotorbikeRepository::new(&txn);
        let current = repo
            .find_by_id(id)
            .await?
            .ok_or(RentalError::MotorbikeNotFound(id))?;
        let motorbike = repo.set_lock_status(id, lock_status).await?;
        let open_ride = RideRepository::new(&txn).find_open_by_motorbike(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Motorbike {} lock {:?} -> {:?}",
            id,
            current.lock_status,
            lock_status
        );

        if let Some(ride) = open_ride {
            let event = match lock_status {
                LockStatus::Locked => RideEvent::Lock,
                LockStatus::Unlocked => RideEvent::Unlock,
            };

            match ride.phase(current.lock_status).apply(event) {
                Ok(phase) => tracing::info!("Ride {} is now {:?}", ride.id, phase),
                Err(err) => tracing::debug!("Ride {} ignored {:?}: {}", ride.id, event, err),
            }
        }

        Ok(motorbike)
    }

    /// Soft-deletes a motorbike.
    ///
    /// # Returns
    /// - `Ok(())` - Motorbike hidden from every read path
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Absent or already deleted
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MotorbikeRepository::new(self.db).soft_delete(id).await? {
            return Err(RentalError::MotorbikeNotFound(id).into());
        }

        tracing::info!("Soft-deleted motorbike {}", id);

        Ok(())
    }
}
