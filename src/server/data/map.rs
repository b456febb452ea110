//! Map data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::map::{CreateMapParam, Map, UpdateMapParam};

pub struct MapRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MapRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a map for a motorbike.
    ///
    /// # Returns
    /// - `Ok(Map)` - The created map
    /// - `Err(DbErr)` - Database error, including a unique violation when the motorbike
    ///   already has a map
    pub async fn create(&self, param: CreateMapParam) -> Result<Map, DbErr> {
        let now = Utc::now();

        let entity = entity::map::ActiveModel {
            motorbike_id: ActiveValue::Set(param.motorbike_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            latitude: ActiveValue::Set(param.latitude),
            longitude: ActiveValue::Set(param.longitude),
            zoom_level: ActiveValue::Set(param.zoom_level),
            map_type: ActiveValue::Set(param.map_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Map::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Map>, DbErr> {
        let entity = entity::prelude::Map::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Map::from_entity))
    }

    pub async fn find_by_motorbike(&self, motorbike_id: i32) -> Result<Option<Map>, DbErr> {
        let entity = entity::prelude::Map::find()
            .filter(entity::map::Column::MotorbikeId.eq(motorbike_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Map::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Map>, DbErr> {
        let entities = entity::prelude::Map::find()
            .order_by_asc(entity::map::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Map::from_entity).collect())
    }

    pub async fn exists_for_motorbike(&self, motorbike_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Map::find()
            .filter(entity::map::Column::MotorbikeId.eq(motorbike_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the fields of a map by map ID.
    ///
    /// # Returns
    /// - `Ok(Map)` - The updated map
    /// - `Err(DbErr::RecordNotFound)` - No map with that ID
    pub async fn update(&self, id: i32, param: UpdateMapParam) -> Result<Map, DbErr> {
        let existing = entity::prelude::Map::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Map with id {} not found", id)))?;

        self.apply_update(existing, param).await
    }

    /// Replaces the fields of the map attached to a motorbike.
    ///
    /// # Returns
    /// - `Ok(Map)` - The updated map
    /// - `Err(DbErr::RecordNotFound)` - The motorbike has no map
    pub async fn update_by_motorbike(
        &self,
        motorbike_id: i32,
        param: UpdateMapParam,
    ) -> Result<Map, DbErr> {
        let existing = entity::prelude::Map::find()
            .filter(entity::map::Column::MotorbikeId.eq(motorbike_id))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Map for motorbike {} not found", motorbike_id))
            })?;

        self.apply_update(existing, param).await
    }

    /// Hard-deletes a map.
    ///
    /// # Returns
    /// - `Ok(true)` - Map deleted
    /// - `Ok(false)` - No map with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Map::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn apply_update(
        &self,
        existing: entity::map::Model,
        param: UpdateMapParam,
    ) -> Result<Map, DbErr> {
        let mut active: entity::map::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.latitude = ActiveValue::Set(param.latitude);
        active.longitude = ActiveValue::Set(param.longitude);
        active.zoom_level = ActiveValue::Set(param.zoom_level);
        active.map_type = ActiveValue::Set(param.map_type);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Map::from_entity(entity))
    }
}
