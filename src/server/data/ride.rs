//! Ride data repository for database operations.
//!
//! Provides persistence for rides: creation, lookups by owner and motorbike, the
//! finished-ride history window, and the field updates made by the rental workflow.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::ride::{DateRange, Ride, RideCharge, UpdateRideParam};

/// Repository providing database operations for rides.
pub struct RideRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RideRepository<'a, C> {
    /// Creates a new RideRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a ride starting at `start_time`, unbilled.
    ///
    /// # Returns
    /// - `Ok(Ride)` - The created ride with duration `"0"` and zero cost
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        motorbike_id: i32,
        start_time: DateTime<Utc>,
    ) -> Result<Ride, DbErr> {
        let entity = entity::ride::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            motorbike_id: ActiveValue::Set(motorbike_id),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(None),
            duration: ActiveValue::Set("0".to_string()),
            cost: ActiveValue::Set(0.0),
            photo_path: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ride::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ride>, DbErr> {
        let entity = entity::prelude::Ride::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Ride::from_entity))
    }

    /// Finds a ride only if it belongs to `user_id`.
    pub async fn find_by_user_and_id(
        &self,
        user_id: i32,
        ride_id: i32,
    ) -> Result<Option<Ride>, DbErr> {
        let entity = entity::prelude::Ride::find_by_id(ride_id)
            .filter(entity::ride::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Ride::from_entity))
    }

    /// Finds the unfinished ride on a motorbike, if any.
    pub async fn find_open_by_motorbike(&self, motorbike_id: i32) -> Result<Option<Ride>, DbErr> {
        let entity = entity::prelude::Ride::find()
            .filter(entity::ride::Column::MotorbikeId.eq(motorbike_id))
            .filter(entity::ride::Column::EndTime.is_null())
            .order_by_desc(entity::ride::Column::StartTime)
            .one(self.db)
            .await?;

        Ok(entity.map(Ride::from_entity))
    }

    /// Gets every ride, most recent first.
    pub async fn get_all(&self) -> Result<Vec<Ride>, DbErr> {
        let entities = entity::prelude::Ride::find()
            .order_by_desc(entity::ride::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ride::from_entity).collect())
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Ride>, DbErr> {
        let entities = entity::prelude::Ride::find()
            .filter(entity::ride::Column::UserId.eq(user_id))
            .order_by_desc(entity::ride::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ride::from_entity).collect())
    }

    pub async fn get_by_motorbike(&self, motorbike_id: i32) -> Result<Vec<Ride>, DbErr> {
        let entities = entity::prelude::Ride::find()
            .filter(entity::ride::Column::MotorbikeId.eq(motorbike_id))
            .order_by_desc(entity::ride::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ride::from_entity).collect())
    }

    /// Gets finished rides that lie completely inside `range`.
    ///
    /// A ride matches when `start_time >= range.start` and `end_time < range.end`; rides
    /// that are still open never match.
    ///
    /// # Arguments
    /// - `range` - Half-open time window
    /// - `user_id` - Restrict to one rider when `Some`
    pub async fn get_finished_between(
        &self,
        range: DateRange,
        user_id: Option<i32>,
    ) -> Result<Vec<Ride>, DbErr> {
        let mut query = entity::prelude::Ride::find()
            .filter(entity::ride::Column::StartTime.gte(range.start))
            .filter(entity::ride::Column::EndTime.is_not_null())
            .filter(entity::ride::Column::EndTime.lt(range.end));

        if let Some(user_id) = user_id {
            query = query.filter(entity::ride::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_asc(entity::ride::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ride::from_entity).collect())
    }

    /// Records the end time, duration and cost of a ride that is still open.
    ///
    /// # Returns
    /// - `Ok(Some(Ride))` - Ride finished
    /// - `Ok(None)` - Ride absent or already finished; nothing was written
    pub async fn finish(&self, id: i32, charge: RideCharge) -> Result<Option<Ride>, DbErr> {
        let result = entity::prelude::Ride::update_many()
            .col_expr(
                entity::ride::Column::EndTime,
                sea_orm::sea_query::Expr::value(charge.end_time),
            )
            .col_expr(
                entity::ride::Column::Duration,
                sea_orm::sea_query::Expr::value(charge.duration_text()),
            )
            .col_expr(
                entity::ride::Column::Cost,
                sea_orm::sea_query::Expr::value(charge.cost),
            )
            .filter(entity::ride::Column::Id.eq(id))
            .filter(entity::ride::Column::EndTime.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Stores the path of the ride's proof photo.
    ///
    /// # Returns
    /// - `Ok(Ride)` - The updated ride
    /// - `Err(DbErr::RecordNotFound)` - No ride with that ID
    pub async fn set_photo_path(&self, id: i32, photo_path: String) -> Result<Ride, DbErr> {
        let existing = self.find_entity(id).await?;

        let mut active: entity::ride::ActiveModel = existing.into();
        active.photo_path = ActiveValue::Set(Some(photo_path));
        let entity = active.update(self.db).await?;

        Ok(Ride::from_entity(entity))
    }

    /// Overwrites every editable field of a ride.
    ///
    /// # Returns
    /// - `Ok(Ride)` - The updated ride
    /// - `Err(DbErr::RecordNotFound)` - No ride with that ID
    pub async fn update(&self, id: i32, param: UpdateRideParam) -> Result<Ride, DbErr> {
        let existing = self.find_entity(id).await?;

        let mut active: entity::ride::ActiveModel = existing.into();
        active.user_id = ActiveValue::Set(param.user_id);
        active.motorbike_id = ActiveValue::Set(param.motorbike_id);
        active.start_time = ActiveValue::Set(param.start_time);
        active.end_time = ActiveValue::Set(param.end_time);
        active.duration = ActiveValue::Set(param.duration);
        active.cost = ActiveValue::Set(param.cost);
        let entity = active.update(self.db).await?;

        Ok(Ride::from_entity(entity))
    }

    /// Hard-deletes a ride.
    ///
    /// # Returns
    /// - `Ok(true)` - Ride deleted
    /// - `Ok(false)` - No ride with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Ride::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(&self, id: i32) -> Result<entity::ride::Model, DbErr> {
        entity::prelude::Ride::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Ride with id {} not found", id)))
    }
}
