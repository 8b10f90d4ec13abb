use sea_orm::DatabaseConnection;

use crate::{
    model::user::SubscriptionDto,
    server::{
        data::{
            follow::FollowRepository, is_unique_violation, recipe::RecipeRepository,
            user::UserRepository,
        },
        error::{relation::RelationError, Error},
        model::db::UserModel,
        util::query::PageRequest,
    },
};

/// Service for subscribing users to recipe authors.
pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    /// Creates a new instance of FollowService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes `user_id` to `author_id`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the subscribing user
    /// - `author_id` - ID of the author to subscribe to
    /// - `recipes_limit` - Maximum number of the author's recipes included in the response
    ///
    /// # Returns
    /// - `Ok(SubscriptionDto)` - Subscription created
    /// - `Err(Error::NotFound)` - Author does not exist
    /// - `Err(Error::RelationError)` - Subscribing to oneself or already subscribed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionDto, Error> {
        let author = self.get_author(author_id).await?;

        if user_id == author_id {
            return Err(RelationError::SelfSubscription.into());
        }

        let follow_repo = FollowRepository::new(self.db);

        if follow_repo.exists(user_id, author_id).await? {
            return Err(RelationError::AlreadySubscribed.into());
        }

        follow_repo
            .create(user_id, author_id)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    Error::from(RelationError::AlreadySubscribed)
                } else {
                    Error::from(err)
                }
            })?;

        self.subscription_dto(author, recipes_limit).await
    }

    /// Removes the subscription of `user_id` to `author_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed
    /// - `Err(Error::NotFound)` - Author does not exist
    /// - `Err(Error::RelationError)` - User was not subscribed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), Error> {
        self.get_author(author_id).await?;

        let result = FollowRepository::new(self.db)
            .delete(user_id, author_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(RelationError::NotSubscribed.into());
        }

        Ok(())
    }

    /// Retrieves a page of the authors `user_id` is subscribed to, ordered by author ID,
    /// along with the total number of subscriptions
    pub async fn get_subscriptions(
        &self,
        user_id: i32,
        page: PageRequest,
        recipes_limit: Option<u64>,
    ) -> Result<(Vec<SubscriptionDto>, u64), Error> {
        let (authors, count) = FollowRepository::new(self.db)
            .get_authors_page(user_id, page.offset(), page.limit)
            .await?;

        let mut subscriptions = Vec::with_capacity(authors.len());
        for author in authors {
            subscriptions.push(self.subscription_dto(author, recipes_limit).await?);
        }

        Ok((subscriptions, count))
    }

    async fn get_author(&self, author_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(author_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("user {}", author_id)))
    }

    /// Builds the subscription view of an author, only called for followed authors
    async fn subscription_dto(
        &self,
        author: UserModel,
        recipes_limit: Option<u64>,
    ) -> Result<SubscriptionDto, Error> {
        let recipe_repo = RecipeRepository::new(self.db);

        let recipes = recipe_repo.get_by_author(author.id, recipes_limit).await?;
        let recipes_count = recipe_repo.count_by_author(author.id).await?;

        Ok(SubscriptionDto {
            email: author.email,
            id: author.id,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: true,
            recipes: recipes.into_iter().map(Into::into).collect(),
            recipes_count,
        })
    }
}
