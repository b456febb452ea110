use super::*;

/// Tests an admin passing the admin check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let admin = factory::create_admin(db).await?;
    let headers = access_headers(&jwt, &admin);

    let caller = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(caller.id, admin.id);
    assert!(caller.is_admin());

    Ok(())
}

/// Tests a normal user failing the admin check.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_access_to_normal_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;
    let headers = access_headers(&jwt, &user);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
