use super::*;

fn update_param() -> UpdateMapParam {
    UpdateMapParam {
        name: "Old Town".to_string(),
        description: "Narrow streets".to_string(),
        latitude: 10.0,
        longitude: 20.0,
        zoom_level: 15,
        map_type: "satellite".to_string(),
    }
}

/// Tests updating a map through its motorbike.
///
/// Expected: Ok with every field replaced
#[tokio::test]
async fn updates_by_motorbike() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;
    let map = factory::create_map(db, motorbike.id).await?;

    let repo = MapRepository::new(db);
    let updated = repo.update_by_motorbike(motorbike.id, update_param()).await?;

    assert_eq!(updated.id, map.id);
    assert_eq!(updated.name, "Old Town");
    assert_eq!(updated.zoom_level, 15);
    assert_eq!(updated.map_type, "satellite");

    Ok(())
}

/// Tests updating maps that do not exist.
///
/// Expected: Err(DbErr::RecordNotFound) by map ID and by motorbike ID
#[tokio::test]
async fn fails_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MapRepository::new(db);

    assert!(matches!(
        repo.update(99, update_param()).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(matches!(
        repo.update_by_motorbike(motorbike.id, update_param()).await,
        Err(DbErr::RecordNotFound(_))
    ));
    assert!(!repo.delete(99).await?);

    Ok(())
}
