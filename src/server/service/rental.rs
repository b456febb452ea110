//! Rental workflow.
//!
//! Coordinates motorbikes, connections and rides through the ride lifecycle. Every
//! operation runs in a single database transaction; any error drops the transaction and
//! rolls back all of its writes.
//!
//! - `create_ride`: motorbike `Available -> Rented` (conditional update) and ride insert
//! - `submit_photo`: requires a locked motorbike; stores the photo, closes the open
//!   connection (motorbike back to `Available`) and records the photo path
//! - `finish_ride`: requires a locked motorbike; computes duration and cost once, and
//!   releases a motorbike the photo step did not

use chrono::Utc;
use entity::sea_orm_active_enums::MotorbikeStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        connection::ConnectionRepository, motorbike::MotorbikeRepository, ride::RideRepository,
        user::UserRepository,
    },
    error::{rental::RentalError, AppError},
    model::{
        motorbike::Motorbike,
        ride::{Ride, RideCharge, RideEvent, TransitionError},
    },
    service::{connection::close_open_connection, photo::PhotoStorage},
};

pub struct RentalWorkflow<'a> {
    db: &'a DatabaseConnection,
    photos: &'a PhotoStorage,
}

impl<'a> RentalWorkflow<'a> {
    pub fn new(db: &'a DatabaseConnection, photos: &'a PhotoStorage) -> Self {
        Self { db, photos }
    }

    /// Starts a ride on an available motorbike.
    ///
    /// # Arguments
    /// - `user_id` - Rider
    /// - `motorbike_id` - Motorbike to rent
    ///
    /// # Returns
    /// - `Ok(Ride)` - The open ride; the motorbike is now `Rented`
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Motorbike absent
    /// - `Err(AppError::NotFound)` - Rider absent
    /// - `Err(AppError::RentalErr(MotorbikeUnavailable))` - Motorbike not `Available`, or
    ///   another request rented it first
    /// - `Err(AppError::RentalErr(OpenRideExists))` - An unfinished ride still references it
    pub async fn create_ride(&self, user_id: i32, motorbike_id: i32) -> Result<Ride, AppError> {
        let txn = self.db.begin().await?;

        let motorbike = load_motorbike(&txn, motorbike_id).await?;

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        if !motorbike.is_available() {
            return Err(RentalError::MotorbikeUnavailable {
                id: motorbike_id,
                status: motorbike.status,
            }
            .into());
        }

        let ride_repo = RideRepository::new(&txn);
        if ride_repo.find_open_by_motorbike(motorbike_id).await?.is_some() {
            return Err(RentalError::OpenRideExists(motorbike_id).into());
        }

        let rented = MotorbikeRepository::new(&txn)
            .transition_status(
                motorbike_id,
                MotorbikeStatus::Available,
                MotorbikeStatus::Rented,
            )
            .await?;
        if !rented {
            return Err(RentalError::MotorbikeUnavailable {
                id: motorbike_id,
                status: MotorbikeStatus::Rented,
            }
            .into());
        }

        let ride = ride_repo.create(user_id, motorbike_id, Utc::now()).await?;
        txn.commit().await?;

        tracing::info!(
            "Ride {} started by user {} on motorbike {}",
            ride.id,
            user_id,
            motorbike_id
        );

        Ok(ride)
    }

    /// Accepts the end-of-ride proof photo.
    ///
    /// The file is written before the database changes; if any later step fails the file
    /// is removed again.
    ///
    /// # Arguments
    /// - `ride_id` - Ride the photo belongs to
    /// - `file_name` - Client-supplied file name
    /// - `bytes` - Photo content
    ///
    /// # Returns
    /// - `Ok(Ride)` - The ride with its photo path recorded
    /// - `Err(AppError::RentalErr(RideNotFound))` - Ride absent
    /// - `Err(AppError::RentalErr(Transition))` - Motorbike unlocked (500), ride finished or
    ///   photo already submitted (400)
    /// - `Err(AppError::RentalErr(NoOpenConnection))` - Motorbike has no open connection
    /// - `Err(AppError::IoErr)` - Photo could not be written
    pub async fn submit_photo(
        &self,
        ride_id: i32,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Ride, AppError> {
        let txn = self.db.begin().await?;

        let ride = load_ride(&txn, ride_id).await?;
        let motorbike = load_motorbike(&txn, ride.motorbike_id).await?;

        let phase = ride
            .phase(motorbike.lock_status)
            .apply(RideEvent::SubmitPhoto)
            .map_err(|source| transition_error(ride_id, source))?;

        let stored = self
            .photos
            .save_ride_photo(ride_id, file_name, bytes)
            .await?;

        match record_photo(txn, motorbike.id, ride_id, stored.clone()).await {
            Ok(ride) => {
                tracing::info!("Ride {} is now {:?}", ride_id, phase);
                Ok(ride)
            }
            Err(err) => {
                self.photos.remove(&stored).await;
                Err(err)
            }
        }
    }

    /// Ends a ride and bills it.
    ///
    /// Duration is the whole seconds since the ride started; cost is
    /// `whole_minutes * RATE_PER_MINUTE + BASE_FEE`. A motorbike still `Rented` because
    /// the photo step was skipped is released to `Available` and its open connection is
    /// closed.
    ///
    /// # Returns
    /// - `Ok(Ride)` - The finished ride with duration and cost
    /// - `Err(AppError::RentalErr(RideNotFound))` - Ride absent
    /// - `Err(AppError::RentalErr(Transition))` - Ride already finished or motorbike not
    ///   locked (400); nothing is written
    pub async fn finish_ride(&self, ride_id: i32) -> Result<Ride, AppError> {
        let txn = self.db.begin().await?;

        let ride = load_ride(&txn, ride_id).await?;
        let motorbike = load_motorbike(&txn, ride.motorbike_id).await?;

        ride.phase(motorbike.lock_status)
            .apply(RideEvent::Finish)
            .map_err(|source| transition_error(ride_id, source))?;

        let charge = RideCharge::compute(ride.start_time, Utc::now());
        let Some(finished) = RideRepository::new(&txn).finish(ride_id, charge).await? else {
            return Err(transition_error(ride_id, TransitionError::AlreadyFinished));
        };

        let released = MotorbikeRepository::new(&txn)
            .transition_status(
                motorbike.id,
                MotorbikeStatus::Rented,
                MotorbikeStatus::Available,
            )
            .await?;
        let closed = if released {
            ConnectionRepository::new(&txn)
                .close_open_for_motorbike(motorbike.id, Utc::now())
                .await?
        } else {
            0
        };
        txn.commit().await?;

        if released {
            tracing::info!(
                "Motorbike {} released by finishing ride {} without photo, {} connection(s) closed",
                motorbike.id,
                ride_id,
                closed
            );
        }
        tracing::info!(
            "Ride {} finished after {}s, cost {}",
            ride_id,
            finished.duration,
            finished.cost
        );

        Ok(finished)
    }
}

/// Closes the motorbike's connection and stores the photo path, then commits.
async fn record_photo(
    txn: DatabaseTransaction,
    motorbike_id: i32,
    ride_id: i32,
    photo_path: String,
) -> Result<Ride, AppError> {
    close_open_connection(&txn, motorbike_id).await?;
    let ride = RideRepository::new(&txn)
        .set_photo_path(ride_id, photo_path)
        .await?;
    txn.commit().await?;

    Ok(ride)
}

fn transition_error(ride_id: i32, source: TransitionError) -> AppError {
    RentalError::Transition { ride_id, source }.into()
}

async fn load_ride<C: ConnectionTrait>(db: &C, ride_id: i32) -> Result<Ride, AppError> {
    RideRepository::new(db)
        .find_by_id(ride_id)
        .await?
        .ok_or_else(|| RentalError::RideNotFound(ride_id).into())
}

async fn load_motorbike<C: ConnectionTrait>(
    db: &C,
    motorbike_id: i32,
) -> Result<Motorbike, AppError> {
    MotorbikeRepository::new(db)
        .find_by_id(motorbike_id)
        .await?
        .ok_or_else(|| RentalError::MotorbikeNotFound(motorbike_id).into())
}
