use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MapDto {
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

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateMapDto {
    pub motorbike_id: i32,
    #[validate(length(min = 3, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Defaults to 12 when omitted.
    #[validate(range(min = 1, max = 20))]
    pub zoom_level: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub map_type: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateMapDto {
    #[validate(length(min = 3, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 1, max = 20))]
    pub zoom_level: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub map_type: String,
}
