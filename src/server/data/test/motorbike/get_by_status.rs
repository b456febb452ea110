use super::*;

/// Tests listing motorbikes by status.
///
/// Expected: Ok with only the motorbikes in the requested status
#[tokio::test]
async fn filters_by_exact_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let available = factory::create_motorbike(db).await?;
    factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Rented)
        .build()
        .await?;
    let maintenance = factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Maintenance)
        .photo("https://img/m.jpg")
        .build()
        .await?;

    let repo = MotorbikeRepository::new(db);

    let result = repo.get_by_status(MotorbikeStatus::Available).await?;
    assert_eq!(result.iter().map(|m| m.id).collect::<Vec<_>>(), vec![available.id]);

    let result = repo.get_by_status(MotorbikeStatus::Maintenance).await?;
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, maintenance.id);
    assert_eq!(result[0].photo_urls, vec!["https://img/m.jpg"]);

    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}

/// Tests the photo order of listed motorbikes.
///
/// Photos are inserted in non-alphabetical order for two motorbikes; every listing and
/// single read must return them as inserted.
///
/// Expected: Ok with each motorbike's photos in insertion order
#[tokio::test]
async fn lists_photos_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_motorbike_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::motorbike::MotorbikeFactory::new(db)
        .photo("https://img/z.jpg")
        .photo("https://img/a.jpg")
        .build()
        .await?;
    let second = factory::motorbike::MotorbikeFactory::new(db)
        .photo("https://img/y.jpg")
        .photo("https://img/b.jpg")
        .build()
        .await?;

    let repo = MotorbikeRepository::new(db);
    let listed = repo.get_all().await?;
    let photos_of = |id: i32| {
        listed
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.photo_urls.clone())
            .unwrap()
    };

    assert_eq!(photos_of(first.id), vec!["https://img/z.jpg", "https://img/a.jpg"]);
    assert_eq!(photos_of(second.id), vec!["https://img/y.jpg", "https://img/b.jpg"]);

    let found = repo.find_by_id(second.id).await?.unwrap();
    assert_eq!(found.photo_urls, vec!["https://img/y.jpg", "https://img/b.jpg"]);

    Ok(())
}
