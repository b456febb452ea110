//! Map factory for creating test map entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test maps attached to an existing motorbike.
pub struct MapFactory<'a> {
    db: &'a DatabaseConnection,
    motorbike_id: i32,
    name: String,
    description: String,
    latitude: f64,
    longitude: f64,
    zoom_level: i32,
    map_type: String,
}

impl<'a> MapFactory<'a> {
    /// Creates a new MapFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Map {id}"`
    /// - zoom_level: `12`
    /// - map_type: `"roadmap"`
    pub fn new(db: &'a DatabaseConnection, motorbike_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            motorbike_id,
            name: format!("Map {}", id),
            description: String::new(),
            latitude: 41.0082,
            longitude: 28.9784,
            zoom_level: 12,
            map_type: "roadmap".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn zoom_level(mut self, zoom_level: i32) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    /// Builds and inserts the map entity into the database.
    pub async fn build(self) -> Result<entity::map::Model, DbErr> {
        let now = Utc::now();
        entity::map::ActiveModel {
            motorbike_id: ActiveValue::Set(self.motorbike_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            zoom_level: ActiveValue::Set(self.zoom_level),
            map_type: ActiveValue::Set(self.map_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a map with default values for the given motorbike.
pub async fn create_map(
    db: &DatabaseConnection,
    motorbike_id: i32,
) -> Result<entity::map::Model, DbErr> {
    MapFactory::new(db, motorbike_id).build().await
}
