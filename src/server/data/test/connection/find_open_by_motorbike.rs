use super::*;

/// Tests locating the open connection of a motorbike.
///
/// Closed connections on the same motorbike are ignored.
///
/// Expected: Ok(Some) with the open connection
#[tokio::test]
async fn ignores_closed_connections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;
    factory::connection::ConnectionFactory::new(db, user.id, motorbike.id)
        .disconnected_at(Utc::now())
        .build()
        .await?;
    let open = factory::create_connection(db, user.id, motorbike.id).await?;

    let repo = ConnectionRepository::new(db);
    let found = repo.find_open_by_motorbike(motorbike.id).await?;

    assert_eq!(found.map(|c| c.id), Some(open.id));

    Ok(())
}

/// Tests a motorbike without any open connection.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;
    factory::connection::ConnectionFactory::new(db, user.id, motorbike.id)
        .disconnected_at(Utc::now())
        .build()
        .await?;

    let repo = ConnectionRepository::new(db);

    assert!(repo.find_open_by_motorbike(motorbike.id).await?.is_none());

    Ok(())
}
