use super::*;

fn create_param(motorbike_id: i32) -> CreateMapParam {
    CreateMapParam {
        motorbike_id,
        name: "Harbour".to_string(),
        description: String::new(),
        latitude: 41.0,
        longitude: 29.0,
        zoom_level: 12,
        map_type: "roadmap".to_string(),
    }
}

/// Tests creating a map for a motorbike.
///
/// Expected: Ok and the map is found through its motorbike
#[tokio::test]
async fn creates_map() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MapRepository::new(db);
    assert!(!repo.exists_for_motorbike(motorbike.id).await?);

    let map = repo.create(create_param(motorbike.id)).await?;

    assert!(repo.exists_for_motorbike(motorbike.id).await?);
    let found = repo.find_by_motorbike(motorbike.id).await?;
    assert_eq!(found.map(|m| m.id), Some(map.id));

    Ok(())
}

/// Tests the one-map-per-motorbike unique index.
///
/// Expected: Err on the second insert for the same motorbike
#[tokio::test]
async fn rejects_second_map_for_motorbike() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::create_motorbike(db).await?;

    let repo = MapRepository::new(db);
    repo.create(create_param(motorbike.id)).await?;

    assert!(repo.create(create_param(motorbike.id)).await.is_err());

    Ok(())
}
