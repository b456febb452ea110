use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct RideDto {
    pub id: i32,
    pub user_id: i32,
    pub motorbike_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Elapsed whole seconds, `"0"` until the ride is finished.
    pub duration: String,
    pub cost: f64,
    pub photo_path: Option<String>,
}

/// Starts a rental. `user_id` defaults to the caller; only admins may set another user.
#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateRideDto {
    #[validate(range(min = 1))]
    pub motorbike_id: i32,
    #[validate(range(min = 1))]
    pub user_id: Option<i32>,
}

/// Admin overwrite of a ride record.
#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateRideDto {
    pub user_id: i32,
    pub motorbike_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    #[validate(length(min = 1, max = 20))]
    pub duration: String,
    #[validate(range(min = 0.0))]
    pub cost: f64,
}

/// Multipart form accepted by the ride photo endpoint.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct RidePhotoForm {
    #[schema(value_type = String, format = Binary)]
    pub photo: Vec<u8>,
}
