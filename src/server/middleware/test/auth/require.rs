use super::*;


/// Tests access without a signed-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests access for a session user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale ID
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(9001).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9001)))
    ));

    Ok(())
}

/// Tests access with no permissions required.
///
/// Expected: Ok(User) for the signed-in user
#[tokio::test]
async fn returns_signed_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let resolved = guard.require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// Verifies that a user who belongs to one bee but not another is denied when both
/// memberships are required.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let (_other, other_bee) = factory::helpers::create_bee_with_manager(db).await?;
    AuthSession::new(session).set_user_id(manager.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard
        .require(&[Permission::BeeMember(bee.id), Permission::BeeMember(other_bee.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
