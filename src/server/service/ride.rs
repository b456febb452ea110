//! Ride queries and admin maintenance.
//!
//! Lifecycle changes (create, photo, finish) live in [`super::rental::RentalWorkflow`];
//! this service only reads rides and applies the admin overwrite and delete operations,
//! which bypass the lifecycle.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::ride::RideRepository,
    error::{rental::RentalError, AppError},
    model::ride::{DateRange, Ride, UpdateRideParam},
};

pub struct RideService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RideService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Ride>, AppError> {
        Ok(RideRepository::new(self.db).get_all().await?)
    }

    /// Gets a ride by ID.
    ///
    /// # Returns
    /// - `Ok(Ride)` - Ride found
    /// - `Err(AppError::RentalErr(RideNotFound))` - No ride with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Ride, AppError> {
        RideRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| RentalError::RideNotFound(id).into())
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Ride>, AppError> {
        Ok(RideRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Gets a ride only if it belongs to `user_id`.
    pub async fn get_by_user_and_id(&self, user_id: i32, ride_id: i32) -> Result<Ride, AppError> {
        RideRepository::new(self.db)
            .find_by_user_and_id(user_id, ride_id)
            .await?
            .ok_or_else(|| RentalError::RideNotFound(ride_id).into())
    }

    pub async fn get_by_motorbike(&self, motorbike_id: i32) -> Result<Vec<Ride>, AppError> {
        Ok(RideRepository::new(self.db)
            .get_by_motorbike(motorbike_id)
            .await?)
    }

    /// Gets finished rides inside `range`, optionally for one rider.
    pub async fn get_finished_between(
        &self,
        range: DateRange,
        user_id: Option<i32>,
    ) -> Result<Vec<Ride>, AppError> {
        Ok(RideRepository::new(self.db)
            .get_finished_between(range, user_id)
            .await?)
    }

    /// Overwrites a ride record without lifecycle checks.
    ///
    /// # Returns
    /// - `Ok(Ride)` - The updated ride
    /// - `Err(AppError::BadRequest)` - `duration` is not a whole number of seconds
    /// - `Err(AppError::RentalErr(RideNotFound))` - No ride with that ID
    pub async fn update(&self, id: i32, param: UpdateRideParam) -> Result<Ride, AppError> {
        if param.duration.parse::<u64>().is_err() {
            return Err(AppError::BadRequest(
                "duration must be a whole number of seconds".to_string(),
            ));
        }

        self.get_by_id(id).await?;

        let ride = RideRepository::new(self.db).update(id, param).await?;

        tracing::warn!("Ride {} overwritten by admin", id);

        Ok(ride)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RideRepository::new(self.db).delete(id).await? {
            return Err(RentalError::RideNotFound(id).into());
        }

        tracing::info!("Deleted ride {}", id);

        Ok(())
    }
}
