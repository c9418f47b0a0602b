use super::*;

/// Tests registering with a valid token.
///
/// Expected: Ok(User) with the token's email, the trimmed nickname and the google provider
#[tokio::test]
async fn registers_user_from_token_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = google_token("early@gmail.com", future_exp());

    let service = UserService::new(db);
    let user = service.sign_up(sign_up_param(token, "  early  ")).await?;

    assert_eq!(user.email, "early@gmail.com");
    assert_eq!(user.nickname, "early");
    assert_eq!(user.provider, "google");

    Ok(())
}

/// Tests registering with an expired token.
///
/// Expected: Err(AppError::SocialLoginErr(InvalidAccessToken)) and no user stored
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = google_token("late@gmail.com", past_exp());

    let service = UserService::new(db);
    let result = service.sign_up(sign_up_param(token, "late")).await;

    assert!(matches!(
        result,
        Err(AppError::SocialLoginErr(SocialLoginError::InvalidAccessToken))
    ));
    assert!(service.check_nickname("late").await?.available);

    Ok(())
}

/// Tests registering with a token that has no payload segment.
///
/// Expected: Err(AppError::SocialLoginErr(MalformedToken))
#[tokio::test]
async fn rejects_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .sign_up(sign_up_param("not-a-token".to_string(), "bee"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::SocialLoginErr(SocialLoginError::MalformedToken(_)))
    ));

    Ok(())
}

/// Tests registering a second time with the same email.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("twice@gmail.com")
        .build()
        .await?;

    let token = google_token("twice@gmail.com", future_exp());

    let service = UserService::new(db);
    let result = service.sign_up(sign_up_param(token, "again")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering with a nickname another user already has.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("honey")
        .build()
        .await?;

    let token = google_token("fresh@gmail.com", future_exp());

    let service = UserService::new(db);
    let result = service.sign_up(sign_up_param(token, "honey")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering with a nickname that is too long.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let token = google_token("long@gmail.com", future_exp());

    let service = UserService::new(db);
    let result = service
        .sign_up(sign_up_param(token, "averylongnickname"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
