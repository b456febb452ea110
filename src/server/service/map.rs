//! Map registry service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{map::MapRepository, motorbike::MotorbikeRepository},
    error::{rental::RentalError, AppError},
    model::map::{CreateMapParam, Map, UpdateMapParam},
};

pub struct MapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MapService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the map of a motorbike.
    ///
    /// # Returns
    /// - `Ok(Map)` - The created map
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Motorbike absent
    /// - `Err(AppError::Conflict)` - The motorbike already has a map
    pub async fn create(&self, param: CreateMapParam) -> Result<Map, AppError> {
        let motorbike_id = param.motorbike_id;
        self.ensure_motorbike(motorbike_id).await?;

        let repo = MapRepository::new(self.db);
        if repo.exists_for_motorbike(motorbike_id).await? {
            return Err(AppError::Conflict(format!(
                "Motorbike {} already has a map",
                motorbike_id
            )));
        }

        Ok(repo.create(param).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Map>, AppError> {
        Ok(MapRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Map, AppError> {
        MapRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Map {} not found", id)))
    }

    /// Gets the map of a motorbike.
    ///
    /// # Returns
    /// - `Ok(Map)` - Map found
    /// - `Err(AppError::RentalErr(MotorbikeNotFound))` - Motorbike absent
    /// - `Err(AppError::NotFound)` - The motorbike has no map
    pub async fn get_by_motorbike(&self, motorbike_id: i32) -> Result<Map, AppError> {
        self.ensure_motorbike(motorbike_id).await?;

        MapRepository::new(self.db)
            .find_by_motorbike(motorbike_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Map for motorbike {} not found", motorbike_id))
            })
    }

    pub async fn update(&self, id: i32, param: UpdateMapParam) -> Result<Map, AppError> {
        Ok(MapRepository::new(self.db).update(id, param).await?)
    }

    pub async fn update_by_motorbike(
        &self,
        motorbike_id: i32,
        param: UpdateMapParam,
    ) -> Result<Map, AppError> {
        self.ensure_motorbike(motorbike_id).await?;

        Ok(MapRepository::new(self.db)
            .update_by_motorbike(motorbike_id, param)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MapRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Map {} not found", id)));
        }

        Ok(())
    }

    async fn ensure_motorbike(&self, motorbike_id: i32) -> Result<(), AppError> {
        if MotorbikeRepository::new(self.db)
            .find_by_id(motorbike_id)
            .await?
            .is_none()
        {
            return Err(RentalError::MotorbikeNotFound(motorbike_id).into());
        }

        Ok(())
    }
}
