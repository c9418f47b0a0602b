use super::*;

/// Tests signing in a registered user.
///
/// Expected: Ok(User) matching the stored user
#[tokio::test]
async fn signs_in_registered_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("member@gmail.com")
        .build()
        .await?;

    let service = UserService::new(db);
    let user = service
        .sign_in(SignInParam {
            provider: SocialProvider::Google,
            social_access_token: google_token("member@gmail.com", future_exp()),
        })
        .await?;

    assert_eq!(user.id, stored.id);

    Ok(())
}

/// Tests signing in with an email nobody registered.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unregistered_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service
        .sign_in(SignInParam {
            provider: SocialProvider::Google,
            social_access_token: google_token("ghost@gmail.com", future_exp()),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests signing in with an expired token for a registered user.
///
/// Expected: Err(AppError::SocialLoginErr(InvalidAccessToken))
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("member@gmail.com")
        .build()
        .await?;

    let service = UserService::new(db);
    let result = service
        .sign_in(SignInParam {
            provider: SocialProvider::Google,
            social_access_token: google_token("member@gmail.com", past_exp()),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::SocialLoginErr(SocialLoginError::InvalidAccessToken))
    ));

    Ok(())
}

/// Tests signing in with a payload encoded in the standard padded alphabet.
///
/// Expected: Ok(User) for the registered email
#[tokio::test]
async fn accepts_standard_base64_payload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .email("a?>b@gmail.com")
        .build()
        .await?;

    let token = standard_token_from_payload(&serde_json::json!({
        "email": "a?>b@gmail.com",
        "exp": future_exp(),
    }));

    let service = UserService::new(db);
    let user = service
        .sign_in(SignInParam {
            provider: SocialProvider::Google,
            social_access_token: token,
        })
        .await?;

    assert_eq!(user.id, stored.id);

    Ok(())
}
