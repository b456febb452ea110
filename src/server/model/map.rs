//! Map display settings attached to a motorbike.

use chrono::{DateTime, Utc};

use crate::model::map::{CreateMapDto, MapDto, UpdateMapDto};

/// Zoom level used when a request omits one.
pub const DEFAULT_ZOOM_LEVEL: i32 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub id: i32,
    pub motorbike_id: i32,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom_level: i32,
    pub map_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Map {
    pub fn from_entity(entity: entity::map::Model) -> Self {
        Self {
            id: entity.id,
            motorbike_id: entity.motorbike_id,
            name: entity.name,
            description: entity.description,
            latitude: entity.latitude,
            longitude: entity.longitude,
            zoom_level: entity.zoom_level,
            map_type: entity.map_type,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MapDto {
        MapDto {
            id: self.id,
            motorbike_id: self.motorbike_id,
            name: self.name,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            zoom_level: self.zoom_level,
            map_type: self.map_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMapParam {
    pub motorbike_id: i32,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom_level: i32,
    pub map_type: String,
}

impl CreateMapParam {
    pub fn from_dto(dto: CreateMapDto) -> Self {
        Self {
            motorbike_id: dto.motorbike_id,
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            latitude: dto.latitude,
            longitude: dto.longitude,
            zoom_level: dto.zoom_level.unwrap_or(DEFAULT_ZOOM_LEVEL),
            map_type: dto.map_type.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateMapParam {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom_level: i32,
    pub map_type: String,
}

impl UpdateMapParam {
    pub fn from_dto(dto: UpdateMapDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            latitude: dto.latitude,
            longitude: dto.longitude,
            zoom_level: dto.zoom_level.unwrap_or(DEFAULT_ZOOM_LEVEL),
            map_type: dto.map_type.trim().to_string(),
        }
    }
}
