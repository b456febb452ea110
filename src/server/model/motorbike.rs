//! Motorbike domain models and parameters.
//!
//! Defines the motorbike registry model with its ordered photo list, the parameter types used
//! for creation and full replacement, and conversions between the closed status enums of the
//! database layer and the API.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};

use crate::{
    model::motorbike::{
        CreateMotorbikeDto, LockStatusDto, MotorbikeDto, MotorbikePhotoDto, MotorbikeStatusDto,
        UpdateMotorbikeDto,
    },
    server::util::text::title_case,
};

/// A rentable motorbike with its photos in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Motorbike {
    pub id: i32,
    pub model: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub status: MotorbikeStatus,
    pub lock_status: LockStatus,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Motorbike {
    /// Converts an entity model and its photo rows to the motorbike domain model.
    ///
    /// Photos are ordered by their row ID so the list reflects insertion order.
    pub fn from_entity(
        entity: entity::motorbike::Model,
        mut photos: Vec<entity::motorbike_photo::Model>,
    ) -> Self {
        photos.sort_by_key(|photo| photo.id);

        Self {
            id: entity.id,
            model: entity.model,
            location_latitude: entity.location_latitude,
            location_longitude: entity.location_longitude,
            status: entity.status,
            lock_status: entity.lock_status,
            photo_urls: photos.into_iter().map(|photo| photo.photo_url).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == MotorbikeStatus::Available
    }

    pub fn is_locked(&self) -> bool {
        self.lock_status == LockStatus::Locked
    }

    pub fn into_dto(self) -> MotorbikeDto {
        MotorbikeDto {
            id: self.id,
            model: self.model,
            location_latitude: self.location_latitude,
            location_longitude: self.location_longitude,
            status: self.status.into(),
            lock_status: self.lock_status.into(),
            photo_urls: self.photo_urls,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A single stored motorbike photo.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorbikePhoto {
    pub id: i32,
    pub photo_url: String,
}

impl MotorbikePhoto {
    pub fn from_entity(entity: entity::motorbike_photo::Model) -> Self {
        Self {
            id: entity.id,
            photo_url: entity.photo_url,
        }
    }

    pub fn into_dto(self) -> MotorbikePhotoDto {
        MotorbikePhotoDto {
            id: self.id,
            photo_url: self.photo_url,
        }
    }
}

/// Parameters for registering a new motorbike.
#[derive(Debug, Clone)]
pub struct CreateMotorbikeParam {
    pub model: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub status: MotorbikeStatus,
    pub lock_status: LockStatus,
    pub photo_urls: Vec<String>,
}

impl CreateMotorbikeParam {
    pub fn from_dto(dto: CreateMotorbikeDto) -> Self {
        Self {
            model: title_case(&dto.model),
            location_latitude: dto.location_latitude,
            location_longitude: dto.location_longitude,
            status: dto.status.into(),
            lock_status: dto.lock_status.into(),
            photo_urls: clean_photo_urls(dto.photo_urls),
        }
    }
}

/// Parameters for a full replacement of a motorbike record.
///
/// An empty `photo_urls` keeps the stored photos; a non-empty list replaces them.
#[derive(Debug, Clone)]
pub struct UpdateMotorbikeParam {
    pub model: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub status: MotorbikeStatus,
    pub lock_status: LockStatus,
    pub photo_urls: Vec<String>,
}

impl UpdateMotorbikeParam {
    pub fn from_dto(dto: UpdateMotorbikeDto) -> Self {
        Self {
            model: title_case(&dto.model),
            location_latitude: dto.location_latitude,
            location_longitude: dto.location_longitude,
            status: dto.status.into(),
            lock_status: dto.lock_status.into(),
            photo_urls: clean_photo_urls(dto.photo_urls),
        }
    }
}

fn clean_photo_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

/// Whether an administrator may move a motorbike directly from `from` to `to`.
///
/// `Rented` is entered and left only through the rental workflow, which keeps it in step
/// with the open ride on the motorbike.
pub fn status_change_allowed(from: MotorbikeStatus, to: MotorbikeStatus) -> bool {
    use MotorbikeStatus::*;

    matches!(
        (from, to),
        (Available, Maintenance) | (Maintenance, Available) | (Available, Available)
            | (Maintenance, Maintenance)
    )
}

impl From<MotorbikeStatusDto> for MotorbikeStatus {
    fn from(dto: MotorbikeStatusDto) -> Self {
        match dto {
            MotorbikeStatusDto::Available => MotorbikeStatus::Available,
            MotorbikeStatusDto::Maintenance => MotorbikeStatus::Maintenance,
            MotorbikeStatusDto::Rented => MotorbikeStatus::Rented,
        }
    }
}

impl From<MotorbikeStatus> for MotorbikeStatusDto {
    fn from(status: MotorbikeStatus) -> Self {
        match status {
            MotorbikeStatus::Available => MotorbikeStatusDto::Available,
            MotorbikeStatus::Maintenance => MotorbikeStatusDto::Maintenance,
            MotorbikeStatus::Rented => MotorbikeStatusDto::Rented,
        }
    }
}

impl From<LockStatusDto> for LockStatus {
    fn from(dto: LockStatusDto) -> Self {
        match dto {
            LockStatusDto::Locked => LockStatus::Locked,
            LockStatusDto::Unlocked => LockStatus::Unlocked,
        }
    }
}

impl From<LockStatus> for LockStatusDto {
    fn from(status: LockStatus) -> Self {
        match status {
            LockStatus::Locked => LockStatusDto::Locked,
            LockStatus::Unlocked => LockStatusDto::Unlocked,
        }
    }
}
