use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, is_unique_violation, user::UserRepository},
    error::{auth::AuthError, validation::ValidationError, Error},
    model::db::UserModel,
    util::{password::verify_password, token::generate_token_key},
};

/// Service issuing, resolving and revoking API tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Exchanges an email and password for the user's API token.
    ///
    /// A user holds at most one token; logging in again returns the existing token until it
    /// is revoked by [`logout`](Self::logout).
    ///
    /// # Returns
    /// - `Ok(String)` - Token key to send as `Authorization: Token <key>`
    /// - `Err(Error::ValidationError)` - Email or password missing
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, email: &str, password: &str) -> Result<String, Error> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        let user_repo = UserRepository::new(self.db);
        let token_repo = AuthTokenRepository::new(self.db);

        let Some(user) = user_repo.get_by_email(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if let Some(token) = token_repo.get_by_user_id(user.id).await? {
            return Ok(token.key);
        }

        match token_repo.create(user.id, &generate_token_key()).await {
            Ok(token) => {
                tracing::debug!(user_id = %user.id, "Issued API token");

                Ok(token.key)
            }
            // A concurrent login created the token first
            Err(err) if is_unique_violation(&err) => token_repo
                .get_by_user_id(user.id)
                .await?
                .map(|token| token.key)
                .ok_or(Error::DbErr(err)),
            Err(err) => Err(err.into()),
        }
    }

    /// Revokes the user's token, succeeding even when no token exists.
    pub async fn logout(&self, user_id: i32) -> Result<(), Error> {
        let result = AuthTokenRepository::new(self.db)
            .delete_by_user_id(user_id)
            .await?;

        if result.rows_affected == 0 {
            tracing::warn!(user_id = %user_id, "Logout requested for user without a token");
        }

        Ok(())
    }

    /// Resolves the user owning a token key, `None` when the key is unknown.
    pub async fn authenticate(&self, key: &str) -> Result<Option<UserModel>, Error> {
        Ok(AuthTokenRepository::new(self.db)
            .get_user_by_key(key)
            .await?)
    }
}
