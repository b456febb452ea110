use super::*;

/// Tests creating a motorbike with photos.
///
/// Verifies that photos come back in the order they were given, both from the create
/// call and from a fresh read.
///
/// Expected: Ok with photos in insertion order
#[tokio::test]
async fn creates_motorbike_with_photos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MotorbikeRepository::new(db);
    let created = repo
        .create(CreateMotorbikeParam {
            model: "Vespa Primavera".to_string(),
            location_latitude: 41.0,
            location_longitude: 29.0,
            status: MotorbikeStatus::Available,
            lock_status: LockStatus::Locked,
            photo_urls: vec!["https://img/1.jpg".to_string(), "https://img/2.jpg".to_string()],
        })
        .await?;

    assert_eq!(created.photo_urls, vec!["https://img/1.jpg", "https://img/2.jpg"]);

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.model, "Vespa Primavera");
    assert_eq!(found.lock_status, LockStatus::Locked);
    assert_eq!(found.photo_urls, created.photo_urls);

    let photos = repo.get_photos(created.id).await?;
    assert_eq!(photos.len(), 2);
    assert!(photos[0].id < photos[1].id);

    Ok(())
}
