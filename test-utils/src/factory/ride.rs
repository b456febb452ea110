//! Ride factory for creating test ride entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rides with customizable fields.
///
/// The referenced user and motorbike must already exist.
pub struct RideFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    motorbike_id: i32,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    duration: String,
    cost: f64,
    photo_path: Option<String>,
}

impl<'a> RideFactory<'a> {
    /// Creates a new RideFactory with default values.
    ///
    /// Defaults:
    /// - start_time: ten minutes ago
    /// - end_time: `None` (open ride)
    /// - duration: `"0"`, cost: `0.0`, no photo
    pub fn new(db: &'a DatabaseConnection, user_id: i32, motorbike_id: i32) -> Self {
        Self {
            db,
            user_id,
            motorbike_id,
            start_time: Utc::now() - Duration::minutes(10),
            end_time: None,
            duration: "0".to_string(),
            cost: 0.0,
            photo_path: None,
        }
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn photo_path(mut self, photo_path: impl Into<String>) -> Self {
        self.photo_path = Some(photo_path.into());
        self
    }

    /// Builds and inserts the ride entity into the database.
    pub async fn build(self) -> Result<entity::ride::Model, DbErr> {
        entity::ride::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            motorbike_id: ActiveValue::Set(self.motorbike_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            duration: ActiveValue::Set(self.duration),
            cost: ActiveValue::Set(self.cost),
            photo_path: ActiveValue::Set(self.photo_path),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ride for the given user and motorbike.
pub async fn create_ride(
    db: &DatabaseConnection,
    user_id: i32,
    motorbike_id: i32,
) -> Result<entity::ride::Model, DbErr> {
    RideFactory::new(db, user_id, motorbike_id).build().await
}
