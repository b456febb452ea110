use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MotorbikeStatusDto {
    Available,
    Maintenance,
    Rented,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LockStatusDto {
    Locked,
    Unlocked,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MotorbikeDto {
    pub id: i32,
    pub model: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub status: MotorbikeStatusDto,
    pub lock_status: LockStatusDto,
    pub photo_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MotorbikePhotoDto {
    pub id: i32,
    pub photo_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateMotorbikeDto {
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub location_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub location_longitude: f64,
    pub status: MotorbikeStatusDto,
    pub lock_status: LockStatusDto,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub photo_urls: Vec<String>,
}

/// Full replacement of a motorbike record. An empty photo list keeps the stored photos.
#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateMotorbikeDto {
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub location_latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub location_longitude: f64,
    pub status: MotorbikeStatusDto,
    pub lock_status: LockStatusDto,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub photo_urls: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateMotorbikeStatusDto {
    pub status: MotorbikeStatusDto,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateLockStatusDto {
    pub lock_status: LockStatusDto,
}
