//! Tests for AuthService token login, logout and lookup.

use foodgram::server::{
    error::{auth::AuthError, validation::ValidationError, Error},
    service::auth::AuthService,
    util::password::hash_password,
};
use foodgram_test_utils::prelude::*;

static PASSWORD: &str = "correct horse battery";

/// Tests logging in with valid credentials.
///
/// Expected: Ok with a 40 character key that authenticates the user
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let hash = hash_password(PASSWORD).unwrap();
    let user = test
        .user()
        .insert_user_with_password_hash("cook", &hash)
        .await?;

    let auth_service = AuthService::new(&test.db);
    let result = auth_service.login(&user.email, PASSWORD).await;

    assert!(result.is_ok());
    let key = result.unwrap();
    assert_eq!(key.len(), 40);
    let authenticated = auth_service.authenticate(&key).await.unwrap();
    assert_eq!(authenticated.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that logging in again returns the existing token.
///
/// Expected: both logins return the same key
#[tokio::test]
async fn reuses_existing_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let hash = hash_password(PASSWORD).unwrap();
    let user = test
        .user()
        .insert_user_with_password_hash("cook", &hash)
        .await?;

    let auth_service = AuthService::new(&test.db);
    let first = auth_service.login(&user.email, PASSWORD).await.unwrap();
    let second = auth_service.login(&user.email, PASSWORD).await.unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Tests that a wrong password and an unknown email are indistinguishable.
///
/// Expected: Err with InvalidCredentials for both
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let hash = hash_password(PASSWORD).unwrap();
    let user = test
        .user()
        .insert_user_with_password_hash("cook", &hash)
        .await?;

    let auth_service = AuthService::new(&test.db);

    assert!(matches!(
        auth_service.login(&user.email, "wrong password").await,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        auth_service.login("nobody@example.com", PASSWORD).await,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with a blank email.
///
/// Expected: Err with MissingCredentials
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = AuthService::new(&test.db).login("  ", PASSWORD).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingCredentials))
    ));

    Ok(())
}

/// Tests that logout revokes the token.
///
/// Expected: the old key no longer authenticates
#[tokio::test]
async fn logout_revokes_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("cook").await?;
    let token = test.user().insert_token(user.id, "k3y").await?;

    let auth_service = AuthService::new(&test.db);
    assert!(auth_service.logout(user.id).await.is_ok());

    let authenticated = auth_service.authenticate(&token.key).await.unwrap();
    assert!(authenticated.is_none());

    Ok(())
}
