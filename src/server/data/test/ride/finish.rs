use super::*;

/// Tests recording the bill of an open ride.
///
/// Expected: Ok(Some) with end time, duration text and cost stored
#[tokio::test]
async fn records_charge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ride) = factory::helpers::create_ride_with_dependencies(db).await?;
    let end = ride.start_time + Duration::minutes(37);

    let repo = RideRepository::new(db);
    let finished = repo
        .finish(ride.id, RideCharge::compute(ride.start_time, end))
        .await?
        .unwrap();

    assert!(!finished.is_open());
    assert_eq!(finished.duration, "2220");
    assert_eq!(finished.cost, 121.0);

    Ok(())
}

/// Tests finishing a ride twice.
///
/// Expected: Ok(None) on the second call and the first bill is kept
#[tokio::test]
async fn second_finish_writes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ride) = factory::helpers::create_ride_with_dependencies(db).await?;

    let repo = RideRepository::new(db);
    repo.finish(
        ride.id,
        RideCharge::compute(ride.start_time, ride.start_time + Duration::minutes(5)),
    )
    .await?;

    let second = repo
        .finish(
            ride.id,
            RideCharge::compute(ride.start_time, ride.start_time + Duration::minutes(50)),
        )
        .await?;

    assert!(second.is_none());
    let stored = repo.find_by_id(ride.id).await?.unwrap();
    assert_eq!(stored.cost, 25.0);
    assert_eq!(stored.duration, "300");

    Ok(())
}
