use super::*;

/// Tests joining connections with their rider and motorbike.
///
/// Expected: Ok with one detail per connection carrying the matching user and motorbike
#[tokio::test]
async fn attaches_user_and_motorbike() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .photo("https://img/1.jpg")
        .build()
        .await?;
    factory::connection::ConnectionFactory::new(db, user.id, motorbike.id)
        .disconnected_at(Utc::now())
        .build()
        .await?;
    factory::create_connection(db, other.id, motorbike.id).await?;

    let repo = ConnectionRepository::new(db);
    let connections = repo.get_by_motorbike(motorbike.id).await?;
    let details = repo.load_details(connections).await?;

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].user.id, user.id);
    assert_eq!(details[1].user.id, other.id);
    assert_eq!(details[1].motorbike.photo_urls, vec!["https://img/1.jpg"]);

    let by_user = repo.get_by_user(other.id).await?;
    assert_eq!(by_user.len(), 1);

    Ok(())
}

/// Tests loading details for an empty list.
///
/// Expected: Ok with an empty list and no queries needed
#[tokio::test]
async fn empty_input_yields_empty_output() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConnectionRepository::new(db);

    assert!(repo.load_details(Vec::new()).await?.is_empty());

    Ok(())
}
