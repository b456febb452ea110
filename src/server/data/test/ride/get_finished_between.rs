use super::*;

fn march(day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

/// Tests the finished-ride window.
///
/// Rides must start inside the window and end inside it; open rides never match.
///
/// Expected: Ok with only the rides completely inside the window
#[tokio::test]
async fn returns_rides_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;

    let inside = factory::ride::RideFactory::new(db, user.id, motorbike.id)
        .start_time(march(2, 10))
        .end_time(march(2, 11))
        .build()
        .await?;
    // Starts before the window.
    factory::ride::RideFactory::new(db, user.id, motorbike.id)
        .start_time(march(1, 23) - Duration::days(1))
        .end_time(march(2, 1))
        .build()
        .await?;
    // Still open.
    factory::ride::RideFactory::new(db, user.id, motorbike.id)
        .start_time(march(2, 12))
        .build()
        .await?;

    let repo = RideRepository::new(db);
    let rides = repo
        .get_finished_between(
            DateRange {
                start: march(1, 0),
                end: march(3, 0),
            },
            None,
        )
        .await?;

    assert_eq!(rides.iter().map(|r| r.id).collect::<Vec<_>>(), vec![inside.id]);

    Ok(())
}

/// Tests the per-user window.
///
/// Expected: Ok with only the requested rider's rides
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;

    for rider in [user.id, other.id] {
        factory::ride::RideFactory::new(db, rider, motorbike.id)
            .start_time(march(2, 10))
            .end_time(march(2, 11))
            .build()
            .await?;
    }

    let repo = RideRepository::new(db);
    let range = DateRange {
        start: march(1, 0),
        end: march(3, 0),
    };

    let rides = repo.get_finished_between(range, Some(other.id)).await?;
    assert_eq!(rides.len(), 1);
    assert_eq!(rides[0].user_id, other.id);

    assert_eq!(repo.get_finished_between(range, None).await?.len(), 2);

    Ok(())
}

/// Tests the day boundaries of a parsed window.
///
/// A ride starting exactly at midnight on the first day and one ending half a second
/// before midnight on the last day both belong to the window; a ride ending at midnight
/// after the last day does not.
///
/// Expected: Ok with the two boundary rides only
#[tokio::test]
async fn includes_rides_on_day_boundaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;

    let at_midnight = factory::ride::RideFactory::new(db, user.id, motorbike.id)
        .start_time(march(1, 0))
        .end_time(march(1, 1))
        .build()
        .await?;
    let last_half_second = factory::ride::RideFactory::new(db, user.id, motorbike.id)
        .start_time(march(2, 10))
        .end_time(march(3, 0) - Duration::milliseconds(500))
        .build()
        .await?;
    // Ends on the following day.
    factory::ride::RideFactory::new(db, user.id, motorbike.id)
        .start_time(march(2, 22))
        .end_time(march(3, 0))
        .build()
        .await?;

    let range = parse_date_range("2025-03-01", "2025-03-02").unwrap();
    let rides = RideRepository::new(db)
        .get_finished_between(range, None)
        .await?;

    assert_eq!(
        rides.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![at_midnight.id, last_half_second.id]
    );

    Ok(())
}
