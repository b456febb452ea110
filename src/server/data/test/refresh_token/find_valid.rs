use super::*;

/// Tests looking up an unexpired token.
///
/// Expected: Ok(Some) before expiry
#[tokio::test]
async fn finds_unexpired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    repo.create(
        "token-1".to_string(),
        user.id,
        UserRole::Normal,
        Utc::now() + Duration::hours(1),
    )
    .await?;

    let found = repo.find_valid("token-1", Utc::now()).await?;

    assert_eq!(found.map(|t| t.user_id), Some(user.id));

    Ok(())
}

/// Tests that expired tokens are treated as absent.
///
/// Expected: Ok(None) after expiry
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    repo.create(
        "token-1".to_string(),
        user.id,
        UserRole::Normal,
        Utc::now() - Duration::minutes(1),
    )
    .await?;

    let found = repo.find_valid("token-1", Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a deleted token can no longer be found.
///
/// Expected: Ok(None) after delete
#[tokio::test]
async fn ignores_deleted_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    repo.create(
        "token-1".to_string(),
        user.id,
        UserRole::Normal,
        Utc::now() + Duration::hours(1),
    )
    .await?;

    assert!(repo.delete("token-1").await?);
    assert!(repo.find_valid("token-1", Utc::now()).await?.is_none());

    Ok(())
}
