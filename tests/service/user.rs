//! Tests for UserService registration, lookup and password changes.

use foodgram::{
    model::user::CreateUserDto,
    server::{
        error::{validation::ValidationError, Error},
        service::{auth::AuthService, user::UserService},
        util::{password::hash_password, query::OffsetRequest},
    },
};
use foodgram_test_utils::prelude::*;

fn registration(email: &str, username: &str, password: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Julia".to_string(),
        last_name: "Child".to_string(),
        password: password.to_string(),
    }
}

/// Tests registering an account and logging in with it.
///
/// Expected: Ok with the stored account, and the password is accepted by login
#[tokio::test]
async fn registers_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = UserService::new(&test.db)
        .register(registration("julia@example.com", "julia", "s0ufflé!"))
        .await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.email, "julia@example.com");
    assert_eq!(created.username, "julia");

    let login = AuthService::new(&test.db)
        .login("julia@example.com", "s0ufflé!")
        .await;
    assert!(login.is_ok());

    Ok(())
}

/// Tests registration with an email or username that is already taken.
///
/// Expected: Err with EmailTaken, then UsernameTaken
#[tokio::test]
async fn rejects_taken_email_and_username() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let existing = test.user().insert_user("julia").await?;

    let user_service = UserService::new(&test.db);

    assert!(matches!(
        user_service
            .register(registration(&existing.email, "someone", "s0ufflé!"))
            .await,
        Err(Error::ValidationError(ValidationError::EmailTaken))
    ));
    assert!(matches!(
        user_service
            .register(registration("other@example.com", "julia", "s0ufflé!"))
            .await,
        Err(Error::ValidationError(ValidationError::UsernameTaken))
    ));

    Ok(())
}

/// Tests registration with invalid fields.
///
/// Expected: Err with the matching validation error
#[tokio::test]
async fn rejects_invalid_registration() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let user_service = UserService::new(&test.db);

    assert!(matches!(
        user_service
            .register(registration("not-an-email", "julia", "s0ufflé!"))
            .await,
        Err(Error::ValidationError(ValidationError::InvalidEmail))
    ));
    assert!(matches!(
        user_service
            .register(registration("julia@example.com", "julia", "short"))
            .await,
        Err(Error::ValidationError(ValidationError::PasswordTooShort(_)))
    ));
    assert!(matches!(
        user_service
            .register(registration("julia@example.com", "julia", "1234567890"))
            .await,
        Err(Error::ValidationError(ValidationError::PasswordNumeric))
    ));
    assert!(matches!(
        user_service
            .register(registration("julia@example.com", " ", "s0ufflé!"))
            .await,
        Err(Error::ValidationError(ValidationError::EmptyField("username")))
    ));

    Ok(())
}

/// Tests `is_subscribed` as seen by different viewers.
///
/// Expected: true for the follower, false for anonymous viewers
#[tokio::test]
async fn resolves_is_subscribed_for_viewer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let reader = test.user().insert_user("reader").await?;
    let author = test.user().insert_user("author").await?;
    test.user().insert_follow(reader.id, author.id).await?;

    let user_service = UserService::new(&test.db);

    let as_reader = user_service.get_user(Some(reader.id), author.id).await.unwrap();
    assert!(as_reader.is_subscribed);

    let anonymous = user_service.get_user(None, author.id).await.unwrap();
    assert!(!anonymous.is_subscribed);

    Ok(())
}

/// Tests looking up a user that does not exist.
///
/// Expected: Err with NotFound
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_recipe_tables().build().await?;

    let result = UserService::new(&test.db).get_user(None, 5).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Tests the offset window over all users.
///
/// Expected: users ordered by ID with the total count
#[tokio::test]
async fn lists_users_by_offset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    for username in ["ann", "bob", "cid"] {
        test.user().insert_user(username).await?;
    }

    let (users, count) = UserService::new(&test.db)
        .get_users(None, OffsetRequest { offset: 1, limit: 1 })
        .await
        .unwrap();

    assert_eq!(count, 3);
    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, vec!["bob"]);

    Ok(())
}

/// Tests changing the password.
///
/// Expected: wrong current password rejected, correct one accepted and the new password works
#[tokio::test]
async fn changes_password() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_user_tables().build().await?;
    let hash = hash_password("old password").unwrap();
    let user = test
        .user()
        .insert_user_with_password_hash("cook", &hash)
        .await?;

    let user_service = UserService::new(&test.db);

    assert!(matches!(
        user_service
            .set_password(&user, "not my password", "new password")
            .await,
        Err(Error::ValidationError(ValidationError::WrongCurrentPassword))
    ));
    assert!(user_service
        .set_password(&user, "old password", "new password")
        .await
        .is_ok());

    let auth_service = AuthService::new(&test.db);
    assert!(auth_service.login(&user.email, "new password").await.is_ok());
    assert!(auth_service.login(&user.email, "old password").await.is_err());

    Ok(())
}
