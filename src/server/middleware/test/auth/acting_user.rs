use super::*;
use crate::server::model::user::User;

/// Tests a request that does not name a user.
///
/// Expected: the caller's own ID
#[tokio::test]
async fn defaults_to_caller() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = User::from_entity(factory::create_user(db).await?);

    assert_eq!(acting_user_id(&caller, None)?, caller.id);

    Ok(())
}

/// Tests a normal user acting for someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn normal_user_cannot_act_for_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caller = User::from_entity(factory::create_user(db).await?);
    let other = factory::create_user(db).await?;

    let result = acting_user_id(&caller, Some(other.id));

    assert!(matches!(result, Err(AuthError::AccessDenied(_, _))));

    Ok(())
}

/// Tests an admin acting for another user.
///
/// Expected: the other user's ID
#[tokio::test]
async fn admin_can_act_for_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = User::from_entity(factory::create_admin(db).await?);
    let other = factory::create_user(db).await?;

    assert_eq!(acting_user_id(&admin, Some(other.id))?, other.id);

    Ok(())
}
