use super::*;
use crate::server::{model::ride::RidePhase, service::motorbike::MotorbikeService};

/// Tests the lock hook on a motorbike with an open ride.
///
/// Expected: Ok with the lock stored and the open ride awaiting lock confirmation
#[tokio::test]
async fn lock_change_moves_open_ride() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Rented)
        .build()
        .await?;
    let ride = factory::create_ride(db, user.id, motorbike.id).await?;

    let updated = MotorbikeService::new(db)
        .update_lock_status(motorbike.id, LockStatus::Locked)
        .await?;

    assert_eq!(updated.lock_status, LockStatus::Locked);
    let stored = crate::server::data::ride::RideRepository::new(db)
        .find_by_id(ride.id)
        .await?
        .unwrap();
    assert!(stored.end_time.is_none());
    assert_eq!(
        stored.phase(updated.lock_status),
        RidePhase::AwaitingLockConfirmation
    );

    Ok(())
}

/// Tests the lock hook on a missing motorbike.
///
/// Expected: Err(MotorbikeNotFound)
#[tokio::test]
async fn lock_change_rejects_missing_motorbike() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MotorbikeService::new(db)
        .update_lock_status(7, LockStatus::Locked)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RentalErr(RentalError::MotorbikeNotFound(7)))
    ));

    Ok(())
}
