use super::*;

/// Tests the uniqueness checks used before a profile is written.
///
/// A user's own email and username never count as taken when that user is excluded.
///
/// Expected: true only when another user holds the value
#[tokio::test]
async fn ignores_the_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .username("first")
        .email("first@example.com")
        .phone("5550001")
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .username("second")
        .email("second@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.email_in_use("first@example.com", Some(first.id)).await?);
    assert!(repo.email_in_use("first@example.com", Some(second.id)).await?);
    assert!(!repo.username_in_use("second", Some(second.id)).await?);
    assert!(repo.username_in_use("second", Some(first.id)).await?);
    assert!(repo.phone_in_use("5550001", None).await?);
    assert!(!repo.phone_in_use("5550002", None).await?);

    Ok(())
}

/// Tests the checks without an excluded user, as used at registration.
///
/// Expected: false for unused values
#[tokio::test]
async fn reports_free_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.email_in_use("new@example.com", None).await?);
    assert!(!repo.username_in_use("new", None).await?);

    Ok(())
}
