use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{DataDto, HealthDto};

/// Tag for grouping system endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Returns the running API version.
#[utoipa::path(
    get,
    path = "/api/version",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "API version", body = DataDto<String>)
    ),
)]
pub async fn version() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(DataDto::one(env!("CARGO_PKG_VERSION").to_string())),
    )
}
