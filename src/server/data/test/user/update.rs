use super::*;

fn update_param(role: Option<UserRole>, password_hash: Option<String>) -> UpdateUserParam {
    UpdateUserParam {
        name: "Grace".to_string(),
        surname: "Hopper".to_string(),
        username: "grace".to_string(),
        email: "grace@example.com".to_string(),
        phone: Some("123".to_string()),
        role,
        password_hash,
    }
}

/// Tests updating a user's profile without touching role or password.
///
/// Expected: Ok with new profile fields and the original role and hash
#[tokio::test]
async fn keeps_role_and_password_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .password_hash("original-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.update(existing.id, update_param(None, None)).await?;

    assert_eq!(user.name, "Grace");
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.role, UserRole::Normal);
    assert_eq!(user.password_hash, "original-hash");

    Ok(())
}

/// Tests updating role and password.
///
/// Expected: Ok with the new role and hash stored
#[tokio::test]
async fn writes_role_and_password_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update(
            existing.id,
            update_param(Some(UserRole::Admin), Some("new-hash".to_string())),
        )
        .await?;

    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(user.password_hash, "new-hash");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, update_param(None, None)).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
