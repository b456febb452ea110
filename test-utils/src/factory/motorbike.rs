//! Motorbike factory for creating test motorbike entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test motorbikes with customizable fields.
///
/// Photos configured through `photo()` are inserted after the motorbike row.
pub struct MotorbikeFactory<'a> {
    db: &'a DatabaseConnection,
    model: String,
    location_latitude: f64,
    location_longitude: f64,
    status: MotorbikeStatus,
    lock_status: LockStatus,
    deleted_at: Option<DateTime<Utc>>,
    photos: Vec<String>,
}

impl<'a> MotorbikeFactory<'a> {
    /// Creates a new MotorbikeFactory with default values.
    ///
    /// Defaults:
    /// - model: `"Model {id}"`
    /// - location: 41.0082, 28.9784
    /// - status: `Available`
    /// - lock_status: `Unlocked`
    /// - no photos, not deleted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: format!("Model {}", id),
            location_latitude: 41.0082,
            location_longitude: 28.9784,
            status: MotorbikeStatus::Available,
            lock_status: LockStatus::Unlocked,
            deleted_at: None,
            photos: Vec::new(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location_latitude = latitude;
        self.location_longitude = longitude;
        self
    }

    pub fn status(mut self, status: MotorbikeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn lock_status(mut self, lock_status: LockStatus) -> Self {
        self.lock_status = lock_status;
        self
    }

    /// Marks the motorbike as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    pub fn photo(mut self, url: impl Into<String>) -> Self {
        self.photos.push(url.into());
        self
    }

    /// Builds and inserts the motorbike entity and its photos into the database.
    ///
    /// # Returns
    /// - `Ok(entity::motorbike::Model)` - Created motorbike entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::motorbike::Model, DbErr> {
        let now = Utc::now();
        let motorbike = entity::motorbike::ActiveModel {
            model: ActiveValue::Set(self.model),
            location_latitude: ActiveValue::Set(self.location_latitude),
            location_longitude: ActiveValue::Set(self.location_longitude),
            status: ActiveValue::Set(self.status),
            lock_status: ActiveValue::Set(self.lock_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for url in self.photos {
            entity::motorbike_photo::ActiveModel {
                motorbike_id: ActiveValue::Set(motorbike.id),
                photo_url: ActiveValue::Set(url),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(motorbike)
    }
}

/// Creates an available, unlocked motorbike with default values.
pub async fn create_motorbike(db: &DatabaseConnection) -> Result<entity::motorbike::Model, DbErr> {
    MotorbikeFactory::new(db).build().await
}
