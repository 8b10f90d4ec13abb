use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, CreatedUserDto, UserDto},
    server::{
        data::{
            follow::FollowRepository,
            is_unique_violation,
            user::{NewUser, UserRepository},
        },
        error::{validation::ValidationError, Error},
        model::db::{user_dto, UserModel},
        util::{
            password::{hash_password, validate_password, verify_password},
            query::OffsetRequest,
        },
    },
};

/// Service for account registration, lookup and password changes.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Arguments
    /// - `user` - Registration payload with the plaintext password
    ///
    /// # Returns
    /// - `Ok(CreatedUserDto)` - The stored account without its password
    /// - `Err(Error::ValidationError)` - Blank fields, invalid email, weak password, or the
    ///   email or username is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, user: CreateUserDto) -> Result<CreatedUserDto, Error> {
        let email = user.email.trim();
        let username = user.username.trim();

        if email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail.into());
        }
        if username.is_empty() {
            return Err(ValidationError::EmptyField("username").into());
        }
        validate_password(&user.password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(email).await? {
            return Err(ValidationError::EmailTaken.into());
        }
        if user_repo.username_exists(username).await? {
            return Err(ValidationError::UsernameTaken.into());
        }

        let password_hash = hash_password(&user.password)?;

        let created = user_repo
            .create(NewUser {
                email,
                username,
                first_name: user.first_name.trim(),
                last_name: user.last_name.trim(),
                password_hash: &password_hash,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    Error::from(ValidationError::AccountExists)
                } else {
                    Error::from(err)
                }
            })?;

        tracing::info!(user_id = %created.id, "Registered user");

        Ok(created.into())
    }

    /// Retrieves a user as seen by `viewer_id`
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found, `is_subscribed` reflects the viewer's subscriptions
    /// - `Err(Error::NotFound)` - No user with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, viewer_id: Option<i32>, user_id: i32) -> Result<UserDto, Error> {
        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Err(Error::NotFound(format!("user {}", user_id)));
        };

        let mut users = self.to_dtos(viewer_id, vec![user]).await?;

        users
            .pop()
            .ok_or_else(|| Error::InternalError("User lost while building response".to_string()))
    }

    /// Retrieves a window of all users ordered by ID along with the total user count
    pub async fn get_users(
        &self,
        viewer_id: Option<i32>,
        window: OffsetRequest,
    ) -> Result<(Vec<UserDto>, u64), Error> {
        let (users, count) = UserRepository::new(self.db)
            .get_page(window.offset, window.limit)
            .await?;

        Ok((self.to_dtos(viewer_id, users).await?, count))
    }

    /// Changes the password of `user` after confirming the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(Error::ValidationError)` - Current password wrong or new password too weak
    /// - `Err(Error::PasswordHashError)` - Hashing the new password failed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set_password(
        &self,
        user: &UserModel,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        if !verify_password(current_password, &user.password_hash) {
            return Err(ValidationError::WrongCurrentPassword.into());
        }
        validate_password(new_password)?;

        let password_hash = hash_password(new_password)?;

        let updated = UserRepository::new(self.db)
            .update_password_hash(user.id, &password_hash)
            .await?;

        if !updated {
            return Err(Error::NotFound(format!("user {}", user.id)));
        }

        Ok(())
    }

    /// Converts users into DTOs, resolving `is_subscribed` for the viewer in one query
    pub async fn to_dtos(
        &self,
        viewer_id: Option<i32>,
        users: Vec<UserModel>,
    ) -> Result<Vec<UserDto>, Error> {
        let followed = followed_among(self.db, viewer_id, &users).await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let is_subscribed = followed.contains(&user.id);
                user_dto(user, is_subscribed)
            })
            .collect())
    }
}

/// Returns the IDs among `users` that `viewer_id` is subscribed to, empty for anonymous viewers
pub(crate) async fn followed_among(
    db: &DatabaseConnection,
    viewer_id: Option<i32>,
    users: &[UserModel],
) -> Result<HashSet<i32>, Error> {
    let Some(viewer_id) = viewer_id else {
        return Ok(HashSet::new());
    };

    let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();

    Ok(FollowRepository::new(db)
        .get_followed_among(viewer_id, &user_ids)
        .await?
        .into_iter()
        .collect())
}
