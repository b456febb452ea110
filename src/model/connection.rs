use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{motorbike::MotorbikeDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ConnectionDto {
    pub id: i32,
    pub user_id: i32,
    pub motorbike_id: i32,
    pub connected_at: DateTime<Utc>,
    pub disconnected_at: Option<DateTime<Utc>>,
    pub user: UserSummaryDto,
    pub motorbike: MotorbikeDto,
}

/// Opens a pairing session. `user_id` defaults to the caller; only admins may set another user.
#[derive(Deserialize, Serialize, Debug, Clone, Validate, ToSchema)]
pub struct ConnectDto {
    #[validate(range(min = 1))]
    pub motorbike_id: i32,
    #[validate(range(min = 1))]
    pub user_id: Option<i32>,
}
