use super::*;

/// Tests the conditional status update.
///
/// Expected: Ok(true) when the motorbike is in the expected status
#[tokio::test]
async fn moves_when_status_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MotorbikeRepository::new(db);
    let moved = repo
        .transition_status(
            motorbike.id,
            MotorbikeStatus::Available,
            MotorbikeStatus::Rented,
        )
        .await?;

    assert!(moved);
    let found = repo.find_by_id(motorbike.id).await?.unwrap();
    assert_eq!(found.status, MotorbikeStatus::Rented);

    Ok(())
}

/// Tests that a second writer racing on the same transition loses.
///
/// Expected: Ok(false) and the status is unchanged by the second call
#[tokio::test]
async fn second_writer_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MotorbikeRepository::new(db);
    assert!(
        repo.transition_status(
            motorbike.id,
            MotorbikeStatus::Available,
            MotorbikeStatus::Rented
        )
        .await?
    );
    assert!(
        !repo
            .transition_status(
                motorbike.id,
                MotorbikeStatus::Available,
                MotorbikeStatus::Maintenance
            )
            .await?
    );

    let found = repo.find_by_id(motorbike.id).await?.unwrap();
    assert_eq!(found.status, MotorbikeStatus::Rented);

    Ok(())
}
