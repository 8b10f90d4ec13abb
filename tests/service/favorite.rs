//! Tests for FavoriteService add and remove.

use foodgram::server::{
    data::favorite::FavoriteRepository,
    error::{relation::RelationError, Error},
    service::favorite::FavoriteService,
};
use foodgram_test_utils::prelude::*;

/// Tests favoriting a recipe.
///
/// Expected: Ok with the short representation of the recipe
#[tokio::test]
async fn adds_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Soup", &[], &[]).await?;

    let result = FavoriteService::new(&test.db).add(cook.id, recipe.id).await;

    assert!(result.is_ok());
    let short = result.unwrap();
    assert_eq!(short.id, recipe.id);
    assert_eq!(short.name, "Soup");
    assert_eq!(short.cooking_time, recipe.cooking_time);

    Ok(())
}

/// Tests favoriting the same recipe twice.
///
/// The second request is rejected and the favorite count of the recipe stays at 1.
///
/// Expected: Err with AlreadyFavorited
#[tokio::test]
async fn rejects_second_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Soup", &[], &[]).await?;

    let favorite_service = FavoriteService::new(&test.db);
    assert!(favorite_service.add(cook.id, recipe.id).await.is_ok());
    let result = favorite_service.add(cook.id, recipe.id).await;

    assert!(matches!(
        result,
        Err(Error::RelationError(RelationError::AlreadyFavorited))
    ));
    let count = FavoriteRepository::new(&test.db)
        .count_by_recipe(recipe.id)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests favoriting a recipe that does not exist.
///
/// Expected: Err with NotFound
#[tokio::test]
async fn returns_not_found_for_unknown_recipe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let result = FavoriteService::new(&test.db).add(cook.id, 42).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Tests removing an existing favorite.
///
/// Expected: Ok and the favorite row is gone
#[tokio::test]
async fn removes_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Soup", &[], &[]).await?;
    test.recipe().insert_favorite(cook.id, recipe.id).await?;

    let result = FavoriteService::new(&test.db)
        .remove(cook.id, recipe.id)
        .await;

    assert!(result.is_ok());
    let exists = FavoriteRepository::new(&test.db)
        .exists(cook.id, recipe.id)
        .await?;
    assert!(!exists);

    Ok(())
}

/// Tests removing a favorite that was never added.
///
/// Expected: Err with NotFavorited
#[tokio::test]
async fn rejects_removing_missing_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Soup", &[], &[]).await?;

    let result = FavoriteService::new(&test.db)
        .remove(cook.id, recipe.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::RelationError(RelationError::NotFavorited))
    ));

    Ok(())
}
