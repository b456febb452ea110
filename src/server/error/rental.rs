//! Rental lifecycle errors.
//!
//! Raised by the rental workflow and the bluetooth connection tracker when a request
//! violates the motorbike/ride/connection state rules.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::MotorbikeStatus;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::ride::TransitionError};

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Motorbike {0} not found")]
    MotorbikeNotFound(i32),

    #[error("Ride {0} not found")]
    RideNotFound(i32),

    /// Motorbike status does not allow starting a ride.
    #[error("Motorbike {id} is not available (status: {status:?})")]
    MotorbikeUnavailable { id: i32, status: MotorbikeStatus },

    /// Another ride on the motorbike has not been finished yet.
    #[error("Motorbike {0} already has an open ride")]
    OpenRideExists(i32),

    /// Motorbike status does not allow a bluetooth connection.
    #[error("Motorbike {id} cannot be connected (status: {status:?})")]
    ConnectionUnavailable { id: i32, status: MotorbikeStatus },

    #[error("Motorbike {0} already has an open connection")]
    ConnectionAlreadyOpen(i32),

    #[error("Motorbike {0} has no open connection")]
    NoOpenConnection(i32),

    /// Ride lifecycle rejected the requested step.
    #[error("Ride {ride_id}: {source}")]
    Transition {
        ride_id: i32,
        #[source]
        source: TransitionError,
    },
}

impl RentalError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MotorbikeNotFound(_) | Self::RideNotFound(_) => StatusCode::NOT_FOUND,
            Self::MotorbikeUnavailable { .. }
            | Self::OpenRideExists(_)
            | Self::NoOpenConnection(_) => StatusCode::BAD_REQUEST,
            Self::ConnectionUnavailable { .. } | Self::ConnectionAlreadyOpen(_) => {
                StatusCode::CONFLICT
            }
            Self::Transition { source, .. } => match source {
                // Surfaces as 500 with the lock message.
                TransitionError::PhotoRequiresLock => StatusCode::INTERNAL_SERVER_ERROR,
                TransitionError::AlreadyFinished
                | TransitionError::NotLocked
                | TransitionError::PhotoAlreadySubmitted => StatusCode::BAD_REQUEST,
            },
        }
    }
}

/// Converts rental errors into HTTP responses.
///
/// Every variant carries a client-facing message, including the 500 returned when a
/// photo is submitted for an unlocked motorbike.
impl IntoResponse for RentalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Transition { source, .. } => source.to_string(),
            other => other.to_string(),
        };

        tracing::info!("Rental request rejected: {}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_photo_is_server_error() {
        let err = RentalError::Transition {
            ride_id: 1,
            source: TransitionError::PhotoRequiresLock,
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unavailable_motorbike_is_bad_request() {
        let err = RentalError::MotorbikeUnavailable {
            id: 1,
            status: MotorbikeStatus::Rented,
        };
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn connection_on_busy_motorbike_is_conflict() {
        let err = RentalError::ConnectionUnavailable {
            id: 1,
            status: MotorbikeStatus::Maintenance,
        };
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }
}
