use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(true) on the first delete, Ok(false) once the row is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}
