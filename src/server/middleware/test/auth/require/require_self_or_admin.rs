use super::*;

/// Tests a user accessing their own resources.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;
    let headers = access_headers(&jwt, &user);

    let caller = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await?;

    assert_eq!(caller.id, user.id);

    Ok(())
}

/// Tests a user accessing another user's resources.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let headers = access_headers(&jwt, &user);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an admin accessing another user's resources.
///
/// Expected: Ok(User) with the admin as caller
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let admin = factory::create_admin(db).await?;
    let other = factory::create_user(db).await?;
    let headers = access_headers(&jwt, &admin);

    let caller = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await?;

    assert_eq!(caller.id, admin.id);

    Ok(())
}
