//! Ride domain models, the ride lifecycle state machine, and billing.
//!
//! A ride moves through [`RidePhase`]s driven by [`RideEvent`]s. The phase is not stored; it
//! is derived from the ride record and the current lock status of its motorbike, so the
//! database remains the single source of truth. Billing is computed once, when the ride
//! finishes, by [`RideCharge::compute`].

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::LockStatus;
use thiserror::Error;

use crate::model::ride::{RideDto, UpdateRideDto};

/// Charge per whole elapsed minute of riding, in currency units.
pub const RATE_PER_MINUTE: i64 = 3;
/// Flat fee added to every finished ride.
pub const BASE_FEE: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub id: i32,
    pub user_id: i32,
    pub motorbike_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: String,
    pub cost: f64,
    pub photo_path: Option<String>,
}

impl Ride {
    pub fn from_entity(entity: entity::ride::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            motorbike_id: entity.motorbike_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            duration: entity.duration,
            cost: entity.cost,
            photo_path: entity.photo_path,
        }
    }

    pub fn into_dto(self) -> RideDto {
        RideDto {
            id: self.id,
            user_id: self.user_id,
            motorbike_id: self.motorbike_id,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            cost: self.cost,
            photo_path: self.photo_path,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Lifecycle phase of this ride given the current lock status of its motorbike.
    pub fn phase(&self, lock: LockStatus) -> RidePhase {
        RidePhase::derive(self.end_time.is_some(), self.photo_path.is_some(), lock)
    }
}

/// Lifecycle phase of a ride.
///
/// ```text
/// Active --Lock--> AwaitingLockConfirmation --SubmitPhoto--> PhotoSubmitted
///    ^                      |                                     |
///    +-------Unlock---------+                                   Finish
///                           +-----------Finish-----------------> Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RidePhase {
    /// Ride started and the motorbike is unlocked.
    Active,
    /// Motorbike locked, waiting for the end-of-ride photo.
    AwaitingLockConfirmation,
    /// Photo stored while locked; the motorbike has been released.
    PhotoSubmitted,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideEvent {
    Lock,
    Unlock,
    SubmitPhoto,
    Finish,
}

/// Rejected ride lifecycle transition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Ride is already finished")]
    AlreadyFinished,

    #[error("Please lock the motorbike before finishing the ride")]
    NotLocked,

    #[error("Please lock the motorbike before submitting the ride photo")]
    PhotoRequiresLock,

    #[error("A photo has already been submitted for this ride")]
    PhotoAlreadySubmitted,
}

impl RidePhase {
    /// Derives the phase from the stored ride state.
    ///
    /// # Arguments
    /// - `finished` - Whether the ride has an end time
    /// - `photo_submitted` - Whether a ride photo has been stored
    /// - `lock` - Current lock status of the ride's motorbike
    pub fn derive(finished: bool, photo_submitted: bool, lock: LockStatus) -> Self {
        if finished {
            RidePhase::Finished
        } else if lock == LockStatus::Unlocked {
            RidePhase::Active
        } else if photo_submitted {
            RidePhase::PhotoSubmitted
        } else {
            RidePhase::AwaitingLockConfirmation
        }
    }

    /// Applies `event` to this phase.
    ///
    /// # Returns
    /// - `Ok(RidePhase)` - Phase after the event
    /// - `Err(TransitionError)` - The event is not allowed in this phase
    pub fn apply(self, event: RideEvent) -> Result<RidePhase, TransitionError> {
        use RideEvent::*;
        use RidePhase::*;

        match (self, event) {
            (Finished, _) => Err(TransitionError::AlreadyFinished),

            (Active, Lock) => Ok(AwaitingLockConfirmation),
            (Active, Unlock) => Ok(Active),
            (Active, SubmitPhoto) => Err(TransitionError::PhotoRequiresLock),
            (Active, Finish) => Err(TransitionError::NotLocked),

            (AwaitingLockConfirmation, Lock) => Ok(AwaitingLockConfirmation),
            (AwaitingLockConfirmation, Unlock) => Ok(Active),
            (AwaitingLockConfirmation, SubmitPhoto) => Ok(PhotoSubmitted),
            (AwaitingLockConfirmation, Finish) => Ok(Finished),

            (PhotoSubmitted, Lock) => Ok(PhotoSubmitted),
            (PhotoSubmitted, Unlock) => Ok(Active),
            (PhotoSubmitted, SubmitPhoto) => Err(TransitionError::PhotoAlreadySubmitted),
            (PhotoSubmitted, Finish) => Ok(Finished),
        }
    }
}

/// Billing outcome of a finished ride.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideCharge {
    pub end_time: DateTime<Utc>,
    /// Whole seconds between start and end, clamped at zero.
    pub duration_secs: i64,
    pub cost: f64,
}

impl RideCharge {
    /// Computes duration and cost for a ride running from `start` to `end`.
    ///
    /// Cost is `whole_minutes * RATE_PER_MINUTE + BASE_FEE`. A clock skew that puts `end`
    /// before `start` bills as a zero-length ride.
    pub fn compute(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let duration_secs = (end - start).num_seconds().max(0);
        let minutes = duration_secs / 60;

        Self {
            end_time: end,
            duration_secs,
            cost: (minutes * RATE_PER_MINUTE + BASE_FEE) as f64,
        }
    }

    pub fn duration_text(&self) -> String {
        self.duration_secs.to_string()
    }
}

/// Admin overwrite of a ride record.
#[derive(Debug, Clone)]
pub struct UpdateRideParam {
    pub user_id: i32,
    pub motorbike_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: String,
    pub cost: f64,
}

impl UpdateRideParam {
    pub fn from_dto(dto: UpdateRideDto) -> Self {
        Self {
            user_id: dto.user_id,
            motorbike_id: dto.motorbike_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            duration: dto.duration.trim().to_string(),
            cost: dto.cost,
        }
    }
}

/// Ride history window; `start` is inclusive and `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
