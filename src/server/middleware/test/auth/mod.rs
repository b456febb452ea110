use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{acting_user_id, AuthGuard, Permission},
    service::auth::jwt::JwtManager,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

mod acting_user;
mod require;

fn jwt() -> JwtManager {
    JwtManager::new(b"test-secret", Duration::minutes(15), Duration::days(7))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn access_headers(jwt: &JwtManager, user: &entity::user::Model) -> HeaderMap {
    let issued = jwt.issue_access_token(user.id, user.role).unwrap();
    bearer(&issued.token)
}
