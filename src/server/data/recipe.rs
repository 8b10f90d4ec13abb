use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::model::db::RecipeModel;

/// Scalar fields of a new recipe
pub struct NewRecipe<'b> {
    pub author_id: i32,
    pub name: &'b str,
    pub image: Option<&'b str>,
    pub text: &'b str,
    pub cooking_time: i32,
}

/// Scalar field changes of a recipe, `None` keeps the stored value
#[derive(Default)]
pub struct RecipeChanges<'b> {
    pub name: Option<&'b str>,
    pub image: Option<&'b str>,
    pub text: Option<&'b str>,
    pub cooking_time: Option<i32>,
}

/// Recipe feed filters, each present filter narrows the result
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeFilter {
    pub author_id: Option<i32>,
    /// Recipes carrying any of these tag slugs
    pub tag_slugs: Vec<String>,
    /// Recipes favorited by this user
    pub favorited_by: Option<i32>,
    /// Recipes in this user's shopping cart
    pub in_cart_of: Option<i32>,
}

impl RecipeFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(author_id) = self.author_id {
            condition = condition.add(entity::recipe::Column::AuthorId.eq(author_id));
        }

        if !self.tag_slugs.is_empty() {
            let tagged = entity::prelude::RecipeTag::find()
                .select_only()
                .column(entity::recipe_tag::Column::RecipeId)
                .inner_join(entity::prelude::Tag)
                .filter(entity::tag::Column::Slug.is_in(self.tag_slugs.clone()))
                .into_query();

            condition = condition.add(entity::recipe::Column::Id.in_subquery(tagged));
        }

        if let Some(user_id) = self.favorited_by {
            let favorited = entity::prelude::Favorite::find()
                .select_only()
                .column(entity::favorite::Column::RecipeId)
                .filter(entity::favorite::Column::UserId.eq(user_id))
                .into_query();

            condition = condition.add(entity::recipe::Column::Id.in_subquery(favorited));
        }

        if let Some(user_id) = self.in_cart_of {
            let in_cart = entity::prelude::ShoppingCart::find()
                .select_only()
                .column(entity::shopping_cart::Column::RecipeId)
                .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                .into_query();

            condition = condition.add(entity::recipe::Column::Id.in_subquery(in_cart));
        }

        condition
    }
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, recipe: NewRecipe<'_>) -> Result<RecipeModel, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(recipe.author_id),
            name: ActiveValue::Set(recipe.name.to_string()),
            image: ActiveValue::Set(recipe.image.map(str::to_string)),
            text: ActiveValue::Set(recipe.text.to_string()),
            cooking_time: ActiveValue::Set(recipe.cooking_time),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    /// Applies scalar changes to a recipe, returning the recipe unchanged when
    /// there is nothing to update
    pub async fn update(
        &self,
        recipe: RecipeModel,
        changes: RecipeChanges<'_>,
    ) -> Result<RecipeModel, DbErr> {
        let mut active = recipe.clone().into_active_model();

        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name.to_string());
        }
        if let Some(image) = changes.image {
            active.image = ActiveValue::Set(Some(image.to_string()));
        }
        if let Some(text) = changes.text {
            active.text = ActiveValue::Set(text.to_string());
        }
        if let Some(cooking_time) = changes.cooking_time {
            active.cooking_time = ActiveValue::Set(cooking_time);
        }

        if !active.is_changed() {
            return Ok(recipe);
        }

        active.update(self.db).await
    }

    /// Deletes a recipe, association rows are removed by cascade
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }

    pub async fn get_by_id(&self, recipe_id: i32) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    /// Retrieves recipes by ID, missing IDs are skipped
    pub async fn get_many_by_ids(&self, recipe_ids: &[i32]) -> Result<Vec<RecipeModel>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::Id.is_in(recipe_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Retrieves a window of the filtered feed, newest first, along with the number of
    /// recipes matching the filter
    pub async fn get_page(
        &self,
        filter: &RecipeFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<RecipeModel>, u64), DbErr> {
        let count = entity::prelude::Recipe::find()
            .filter(filter.condition())
            .count(self.db)
            .await?;

        let recipes = entity::prelude::Recipe::find()
            .filter(filter.condition())
            .order_by_desc(entity::recipe::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok((recipes, count))
    }

    /// Retrieves the newest recipes of an author, all of them when `limit` is `None`
    pub async fn get_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }
}
