use super::*;

fn update_param(photo_urls: Vec<String>) -> UpdateMotorbikeParam {
    UpdateMotorbikeParam {
        model: "Updated".to_string(),
        location_latitude: 1.5,
        location_longitude: 2.5,
        status: MotorbikeStatus::Maintenance,
        lock_status: LockStatus::Locked,
        photo_urls,
    }
}

/// Tests a full update without photos.
///
/// Expected: Ok with new fields and the original photos kept
#[tokio::test]
async fn keeps_photos_when_none_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .photo("https://img/old.jpg")
        .build()
        .await?;

    let repo = MotorbikeRepository::new(db);
    let updated = repo.update(motorbike.id, update_param(Vec::new())).await?;

    assert_eq!(updated.model, "Updated");
    assert_eq!(updated.status, MotorbikeStatus::Maintenance);
    assert_eq!(updated.lock_status, LockStatus::Locked);
    assert_eq!(updated.photo_urls, vec!["https://img/old.jpg"]);

    Ok(())
}

/// Tests a full update that replaces photos.
///
/// Expected: Ok with only the new photos stored
#[tokio::test]
async fn replaces_photos_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .photo("https://img/old.jpg")
        .build()
        .await?;

    let repo = MotorbikeRepository::new(db);
    let updated = repo
        .update(
            motorbike.id,
            update_param(vec!["https://img/a.jpg".to_string(), "https://img/b.jpg".to_string()]),
        )
        .await?;

    assert_eq!(updated.photo_urls, vec!["https://img/a.jpg", "https://img/b.jpg"]);
    assert_eq!(repo.get_photos(motorbike.id).await?.len(), 2);

    Ok(())
}

/// Tests the lock status setter.
///
/// Expected: Ok with the new lock status persisted
#[tokio::test]
async fn sets_lock_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MotorbikeRepository::new(db);
    let updated = repo.set_lock_status(motorbike.id, LockStatus::Locked).await?;

    assert_eq!(updated.lock_status, LockStatus::Locked);
    assert!(repo.find_by_id(motorbike.id).await?.unwrap().is_locked());

    Ok(())
}

/// Tests updating a motorbike that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_motorbike() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MotorbikeRepository::new(db);

    assert!(matches!(
        repo.update(42, update_param(Vec::new())).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.set_status(42, MotorbikeStatus::Available).await,
        Err(DbErr::RecordNotFound(_))
    ));

    Ok(())
}
