use super::*;

mod require_admin;
mod require_self_or_admin;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;

    let other = JwtManager::new(b"other-secret", Duration::minutes(15), Duration::days(7));
    let headers = access_headers(&other, &user);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests using a refresh token as a bearer token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;

    let refresh = jwt.issue_refresh_token(user.id, user.role).unwrap();
    let headers = bearer(&refresh.token);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let issued = jwt
        .issue_access_token(4242, entity::sea_orm_active_enums::UserRole::Normal)
        .unwrap();
    let headers = bearer(&issued.token);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests an empty permission list.
///
/// Expected: Ok(User) for any signed-in user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();
    let user = factory::create_user(db).await?;
    let headers = access_headers(&jwt, &user);

    let caller = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(caller.id, user.id);

    Ok(())
}
