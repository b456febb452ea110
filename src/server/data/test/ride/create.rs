use super::*;

/// Tests opening a ride.
///
/// Expected: Ok with no end time, duration "0" and zero cost
#[tokio::test]
async fn creates_unbilled_ride() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;

    let repo = RideRepository::new(db);
    let ride = repo.create(user.id, motorbike.id, Utc::now()).await?;

    assert!(ride.is_open());
    assert_eq!(ride.duration, "0");
    assert_eq!(ride.cost, 0.0);
    assert!(ride.photo_path.is_none());

    let open = repo.find_open_by_motorbike(motorbike.id).await?;
    assert_eq!(open.map(|r| r.id), Some(ride.id));

    Ok(())
}

/// Tests looking a ride up through its owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn finds_ride_only_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, ride) = factory::helpers::create_ride_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let repo = RideRepository::new(db);

    assert!(repo.find_by_user_and_id(user.id, ride.id).await?.is_some());
    assert!(repo.find_by_user_and_id(other.id, ride.id).await?.is_none());
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);
    assert!(repo.get_by_user(other.id).await?.is_empty());

    Ok(())
}
