use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores every profile field and the requested role.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let mut param = create_param("ada", "ada@example.com");
    param.phone = Some("5551234".to_string());
    param.role = UserRole::Admin;

    let user = repo.create(param).await?;

    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.phone.as_deref(), Some("5551234"));
    assert_eq!(user.role, UserRole::Admin);
    assert!(user.is_admin());

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err when a second user registers with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("first", "same@example.com")).await?;

    let result = repo.create(create_param("second", "same@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
