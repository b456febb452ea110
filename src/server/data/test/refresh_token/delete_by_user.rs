use super::*;

/// Tests that logout removes every token of one user only.
///
/// Expected: Ok(2) and the other user's token is kept
#[tokio::test]
async fn deletes_only_that_users_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let expires_at = Utc::now() + Duration::hours(1);

    let repo = RefreshTokenRepository::new(db);
    repo.create("a".to_string(), user.id, UserRole::Normal, expires_at)
        .await?;
    repo.create("b".to_string(), user.id, UserRole::Normal, expires_at)
        .await?;
    repo.create("c".to_string(), other.id, UserRole::Normal, expires_at)
        .await?;

    let deleted = repo.delete_by_user(user.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find_valid("c", Utc::now()).await?.is_some());

    Ok(())
}
