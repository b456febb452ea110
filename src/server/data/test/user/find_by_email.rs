use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("rider@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("rider@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
