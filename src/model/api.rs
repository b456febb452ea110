use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Success envelope wrapping every non-empty response body.
///
/// `count` is the number of items in `data`, or 1 for a single object.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct DataDto<T> {
    pub data: T,
    pub count: usize,
}

impl<T> DataDto<T> {
    pub fn one(data: T) -> Self {
        Self { data, count: 1 }
    }
}

impl<T> DataDto<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
}
