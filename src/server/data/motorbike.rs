//! Motorbike data repository for database operations.
//!
//! This module provides the `MotorbikeRepository` for managing motorbikes and their photos.
//! Soft-deleted motorbikes are excluded from every read. Photos are loaded in a single
//! batched query per read and attached in insertion order.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::motorbike::{
    CreateMotorbikeParam, Motorbike, MotorbikePhoto, UpdateMotorbikeParam,
};

/// Repository providing database operations for motorbike management.
pub struct MotorbikeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MotorbikeRepository<'a, C> {
    /// Creates a new MotorbikeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or open transaction
    ///
    /// # Returns
    /// - `MotorbikeRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new motorbike together with its photos.
    ///
    /// # Arguments
    /// - `param` - Motorbike fields and photo URLs in display order
    ///
    /// # Returns
    /// - `Ok(Motorbike)` - The created motorbike with its photos
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMotorbikeParam) -> Result<Motorbike, DbErr> {
        let now = Utc::now();

        let entity = entity::motorbike::ActiveModel {
            model: ActiveValue::Set(param.model),
            location_latitude: ActiveValue::Set(param.location_latitude),
            location_longitude: ActiveValue::Set(param.location_longitude),
            status: ActiveValue::Set(param.status),
            lock_status: ActiveValue::Set(param.lock_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let photos = self.insert_photos(entity.id, param.photo_urls).await?;

        Ok(Motorbike::from_entity(entity, photos))
    }

    /// Finds a motorbike that has not been soft-deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Motorbike))` - Motorbike found with photos
    /// - `Ok(None)` - Motorbike absent or soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Motorbike>, DbErr> {
        let Some(entity) = entity::prelude::Motorbike::find_by_id(id)
            .filter(entity::motorbike::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let photos = entity::prelude::MotorbikePhoto::find()
            .filter(entity::motorbike_photo::Column::MotorbikeId.eq(id))
            .order_by_asc(entity::motorbike_photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Motorbike::from_entity(entity, photos)))
    }

    /// Gets every motorbike that has not been soft-deleted, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Motorbike>, DbErr> {
        let entities = entity::prelude::Motorbike::find()
            .filter(entity::motorbike::Column::DeletedAt.is_null())
            .order_by_asc(entity::motorbike::Column::Id)
            .all(self.db)
            .await?;

        self.with_photos(entities).await
    }

    /// Gets every motorbike in exactly the given status, ordered by ID.
    pub async fn get_by_status(&self, status: MotorbikeStatus) -> Result<Vec<Motorbike>, DbErr> {
        let entities = entity::prelude::Motorbike::find()
            .filter(entity::motorbike::Column::DeletedAt.is_null())
            .filter(entity::motorbike::Column::Status.eq(status))
            .order_by_asc(entity::motorbike::Column::Id)
            .all(self.db)
            .await?;

        self.with_photos(entities).await
    }

    /// Gets the motorbikes with the given IDs, soft-deleted ones included.
    ///
    /// Used to project historical records (connections) that reference a motorbike which
    /// may since have been retired.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Motorbike>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Motorbike::find()
            .filter(entity::motorbike::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        self.with_photos(entities).await
    }

    /// Gets the photos of a motorbike in insertion order.
    pub async fn get_photos(&self, motorbike_id: i32) -> Result<Vec<MotorbikePhoto>, DbErr> {
        let entities = entity::prelude::MotorbikePhoto::find()
            .filter(entity::motorbike_photo::Column::MotorbikeId.eq(motorbike_id))
            .order_by_asc(entity::motorbike_photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MotorbikePhoto::from_entity).collect())
    }

    /// Replaces every field of a motorbike.
    ///
    /// The stored photos are replaced only when `param.photo_urls` is non-empty.
    ///
    /// # Returns
    /// - `Ok(Motorbike)` - The updated motorbike with its current photos
    /// - `Err(DbErr::RecordNotFound)` - Motorbike absent or soft-deleted
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, param: UpdateMotorbikeParam) -> Result<Motorbike, DbErr> {
        let existing = self.find_entity(id).await?;

        let mut active: entity::motorbike::ActiveModel = existing.into();
        active.model = ActiveValue::Set(param.model);
        active.location_latitude = ActiveValue::Set(param.location_latitude);
        active.location_longitude = ActiveValue::Set(param.location_longitude);
        active.status = ActiveValue::Set(param.status);
        active.lock_status = ActiveValue::Set(param.lock_status);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        if !param.photo_urls.is_empty() {
            entity::prelude::MotorbikePhoto::delete_many()
                .filter(entity::motorbike_photo::Column::MotorbikeId.eq(id))
                .exec(self.db)
                .await?;
            self.insert_photos(id, param.photo_urls).await?;
        }

        let photos = entity::prelude::MotorbikePhoto::find()
            .filter(entity::motorbike_photo::Column::MotorbikeId.eq(id))
            .order_by_asc(entity::motorbike_photo::Column::Id)
            .all(self.db)
            .await?;

        Ok(Motorbike::from_entity(entity, photos))
    }

    /// Overwrites the availability status unconditionally.
    ///
    /// # Returns
    /// - `Ok(Motorbike)` - The updated motorbike
    /// - `Err(DbErr::RecordNotFound)` - Motorbike absent or soft-deleted
    pub async fn set_status(&self, id: i32, status: MotorbikeStatus) -> Result<Motorbike, DbErr> {
        let existing = self.find_entity(id).await?;

        let mut active: entity::motorbike::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Motorbike with id {} not found", id)))
    }

    /// Overwrites the lock status unconditionally.
    ///
    /// # Returns
    /// - `Ok(Motorbike)` - The updated motorbike
    /// - `Err(DbErr::RecordNotFound)` - Motorbike absent or soft-deleted
    pub async fn set_lock_status(
        &self,
        id: i32,
        lock_status: LockStatus,
    ) -> Result<Motorbike, DbErr> {
        let existing = self.find_entity(id).await?;

        let mut active: entity::motorbike::ActiveModel = existing.into();
        active.lock_status = ActiveValue::Set(lock_status);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Motorbike with id {} not found", id)))
    }

    /// Moves a motorbike from `from` to `to` only if it is still in `from`.
    ///
    /// Issues a single `UPDATE ... WHERE id = ? AND status = ?` so a concurrent writer that
    /// changed the status first makes this call a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Motorbike absent, soft-deleted, or no longer in `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: i32,
        from: MotorbikeStatus,
        to: MotorbikeStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Motorbike::update_many()
            .col_expr(
                entity::motorbike::Column::Status,
                sea_orm::sea_query::Expr::value(to),
            )
            .col_expr(
                entity::motorbike::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::motorbike::Column::Id.eq(id))
            .filter(entity::motorbike::Column::Status.eq(from))
            .filter(entity::motorbike::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Marks a motorbike as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Motorbike soft-deleted
    /// - `Ok(false)` - Motorbike absent or already deleted
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let now = Utc::now();

        let result = entity::prelude::Motorbike::update_many()
            .col_expr(
                entity::motorbike::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                entity::motorbike::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(entity::motorbike::Column::Id.eq(id))
            .filter(entity::motorbike::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_entity(&self, id: i32) -> Result<entity::motorbike::Model, DbErr> {
        entity::prelude::Motorbike::find_by_id(id)
            .filter(entity::motorbike::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Motorbike with id {} not found", id)))
    }

    async fn insert_photos(
        &self,
        motorbike_id: i32,
        photo_urls: Vec<String>,
    ) -> Result<Vec<entity::motorbike_photo::Model>, DbErr> {
        let mut photos = Vec::with_capacity(photo_urls.len());
        for photo_url in photo_urls {
            let photo = entity::motorbike_photo::ActiveModel {
                motorbike_id: ActiveValue::Set(motorbike_id),
                photo_url: ActiveValue::Set(photo_url),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            photos.push(photo);
        }

        Ok(photos)
    }

    /// Attaches photos to a list of motorbikes using one batched query.
    async fn with_photos(
        &self,
        entities: Vec<entity::motorbike::Model>,
    ) -> Result<Vec<Motorbike>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = entities.iter().map(|m| m.id).collect();
        let photos = entity::prelude::MotorbikePhoto::find()
            .filter(entity::motorbike_photo::Column::MotorbikeId.is_in(ids))
            .order_by_asc(entity::motorbike_photo::Column::Id)
            .all(self.db)
            .await?;

        let mut photos_by_motorbike: HashMap<i32, Vec<entity::motorbike_photo::Model>> =
            HashMap::new();
        for photo in photos {
            photos_by_motorbike
                .entry(photo.motorbike_id)
                .or_default()
                .push(photo);
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let photos = photos_by_motorbike.remove(&entity.id).unwrap_or_default();
                Motorbike::from_entity(entity, photos)
            })
            .collect())
    }
}
