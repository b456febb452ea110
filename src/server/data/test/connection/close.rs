use super::*;

/// Tests closing an open connection.
///
/// Expected: Ok(true) on the first close, Ok(false) on the second
#[tokio::test]
async fn closes_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, connection) = factory::helpers::create_connection_with_dependencies(db).await?;

    let repo = ConnectionRepository::new(db);
    assert!(repo.close(connection.id, Utc::now()).await?);
    assert!(!repo.close(connection.id, Utc::now()).await?);

    let found = repo.find_by_id(connection.id).await?.unwrap();
    assert!(!found.is_open());

    Ok(())
}

/// Tests deleting a connection row.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_connection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, connection) = factory::helpers::create_connection_with_dependencies(db).await?;

    let repo = ConnectionRepository::new(db);
    assert!(repo.delete(connection.id).await?);
    assert!(!repo.delete(connection.id).await?);

    Ok(())
}

/// Tests closing whatever is open on a motorbike.
///
/// Connections of other motorbikes and already closed ones are left alone.
///
/// Expected: Ok(1) for the motorbike's open connection, then Ok(0)
#[tokio::test]
async fn closes_open_connections_of_motorbike() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, motorbike, connection) =
        factory::helpers::create_connection_with_dependencies(db).await?;
    let other_motorbike = factory::create_motorbike(db).await?;
    let other = factory::create_connection(db, user.id, other_motorbike.id).await?;

    let repo = ConnectionRepository::new(db);
    assert_eq!(repo.close_open_for_motorbike(motorbike.id, Utc::now()).await?, 1);
    assert_eq!(repo.close_open_for_motorbike(motorbike.id, Utc::now()).await?, 0);

    assert!(!repo.find_by_id(connection.id).await?.unwrap().is_open());
    assert!(repo.find_by_id(other.id).await?.unwrap().is_open());

    Ok(())
}
