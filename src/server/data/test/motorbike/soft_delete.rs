use super::*;

/// Tests that soft-deleted motorbikes disappear from every read path.
///
/// Expected: Ok(true) once, then absent from find, list and status queries
#[tokio::test]
async fn hides_deleted_motorbike() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MotorbikeRepository::new(db);
    assert!(repo.soft_delete(motorbike.id).await?);
    assert!(!repo.soft_delete(motorbike.id).await?);

    assert!(repo.find_by_id(motorbike.id).await?.is_none());
    assert!(repo.get_all().await?.is_empty());
    assert!(repo
        .get_by_status(MotorbikeStatus::Available)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that a deleted motorbike cannot be moved by the workflow.
///
/// Expected: Ok(false) from transition_status
#[tokio::test]
async fn deleted_motorbike_cannot_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .deleted()
        .build()
        .await?;

    let repo = MotorbikeRepository::new(db);
    let moved = repo
        .transition_status(
            motorbike.id,
            MotorbikeStatus::Available,
            MotorbikeStatus::Rented,
        )
        .await?;

    assert!(!moved);

    Ok(())
}
