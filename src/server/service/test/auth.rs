use super::*;
use crate::server::{
    error::auth::AuthError,
    service::auth::{jwt::JwtManager, password::hash_password, AuthService},
};
use chrono::Duration;
use entity::sea_orm_active_enums::UserRole;

fn jwt() -> JwtManager {
    JwtManager::new(b"test-secret", Duration::minutes(15), Duration::days(7))
}

async fn user_with_password(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
    role: UserRole,
) -> entity::user::Model {
    factory::user::UserFactory::new(db)
        .email(email)
        .password_hash(hash_password(password).unwrap())
        .role(role)
        .build()
        .await
        .unwrap()
}

/// Tests logging in with a mixed-case email.
///
/// Expected: Ok with an access token carrying the user ID
#[tokio::test]
async fn login_issues_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = user_with_password(db, "rider@example.com", "secret1", UserRole::Normal).await;

    let (tokens, logged_in) = AuthService::new(db, &jwt)
        .login(" Rider@Example.com ", "secret1")
        .await?;

    assert_eq!(logged_in.id, user.id);
    let claims = jwt.validate(&tokens.access_token).unwrap();
    assert!(claims.is_access());
    assert_eq!(claims.user_id(), Some(user.id));

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    user_with_password(db, "rider@example.com", "secret1", UserRole::Normal).await;

    let result = AuthService::new(db, &jwt)
        .login("rider@example.com", "wrong")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests the admin login with a normal account.
///
/// Expected: Err(AccessDenied) and no refresh token stored
#[tokio::test]
async fn login_admin_rejects_normal_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    user_with_password(db, "rider@example.com", "secret1", UserRole::Normal).await;

    let result = AuthService::new(db, &jwt)
        .login_admin("rider@example.com", "secret1")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let stored = entity::prelude::RefreshToken::find().all(db).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests that a refresh token can only be used once.
///
/// Expected: first refresh Ok with a new pair, reuse of the old token Err(InvalidRefreshToken)
#[tokio::test]
async fn refresh_rotates_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    user_with_password(db, "rider@example.com", "secret1", UserRole::Normal).await;
    let service = AuthService::new(db, &jwt);

    let (tokens, _) = service.login("rider@example.com", "secret1").await?;
    let rotated = service.refresh(&tokens.refresh_token).await?;
    assert_ne!(rotated.refresh_token, tokens.refresh_token);

    let reused = service.refresh(&tokens.refresh_token).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    service.refresh(&rotated.refresh_token).await?;

    Ok(())
}

/// Tests refreshing with an access token.
///
/// Expected: Err(InvalidRefreshToken)
#[tokio::test]
async fn refresh_rejects_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    user_with_password(db, "rider@example.com", "secret1", UserRole::Normal).await;
    let service = AuthService::new(db, &jwt);

    let (tokens, _) = service.login("rider@example.com", "secret1").await?;
    let result = service.refresh(&tokens.access_token).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}

/// Tests that logout revokes every refresh token of the user.
///
/// Expected: refresh after logout Err(InvalidRefreshToken)
#[tokio::test]
async fn logout_revokes_refresh_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let user = user_with_password(db, "rider@example.com", "secret1", UserRole::Normal).await;
    let service = AuthService::new(db, &jwt);

    let (tokens, _) = service.login("rider@example.com", "secret1").await?;
    service.logout(user.id).await?;

    let result = service.refresh(&tokens.refresh_token).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}
