//! Tests for RecipeService.
//!
//! Covers validation of recipe payloads, ownership checks on update and delete, and the
//! feed filters.

use foodgram::{
    model::recipe::{IngredientAmountDto, UpdateRecipeDto},
    server::{
        data::recipe::{RecipeFilter, RecipeRepository},
        error::{auth::AuthError, validation::ValidationError, Error},
        service::recipe::RecipeService,
        util::query::PageRequest,
    },
};
use foodgram_test_utils::prelude::*;

use crate::util::recipe_payload;

fn kitchen() -> TestBuilder {
    TestBuilder::new()
        .with_recipe_tables()
        .with_tag("breakfast")
        .with_tag("dinner")
        .with_ingredient("flour", "g")
        .with_ingredient("egg", "pcs")
}

/// Tests creating a recipe with the smallest allowed cooking time.
///
/// Expected: Ok with ingredients, tags and author resolved
#[tokio::test]
async fn creates_recipe_with_minimal_cooking_time() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let mut payload = recipe_payload("Omelette", &[(2, 3)], &[1]);
    payload.cooking_time = 1;

    let result = RecipeService::new(&test.db)
        .create_recipe(cook.id, payload)
        .await;

    assert!(result.is_ok());
    let recipe = result.unwrap();
    assert_eq!(recipe.cooking_time, 1);
    assert_eq!(recipe.author.id, cook.id);
    assert_eq!(recipe.tags.len(), 1);
    assert_eq!(recipe.tags[0].slug, "breakfast");
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.ingredients[0].name, "egg");
    assert_eq!(recipe.ingredients[0].measurement_unit, "pcs");
    assert_eq!(recipe.ingredients[0].amount, 3);
    assert!(!recipe.is_favorited);
    assert!(!recipe.is_in_shopping_cart);

    Ok(())
}

/// Tests creating a recipe with zero cooking time.
///
/// Expected: Err with InvalidCookingTime and nothing stored
#[tokio::test]
async fn rejects_zero_cooking_time() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let mut payload = recipe_payload("Omelette", &[(2, 3)], &[1]);
    payload.cooking_time = 0;

    let result = RecipeService::new(&test.db)
        .create_recipe(cook.id, payload)
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidCookingTime(0)))
    ));
    assert_eq!(RecipeRepository::new(&test.db).count_by_author(cook.id).await?, 0);

    Ok(())
}

/// Tests creating a recipe listing the same ingredient twice.
///
/// Expected: Err with DuplicateIngredient
#[tokio::test]
async fn rejects_repeated_ingredient() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let result = RecipeService::new(&test.db)
        .create_recipe(cook.id, recipe_payload("Bread", &[(1, 500), (1, 20)], &[2]))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::DuplicateIngredient(1)))
    ));

    Ok(())
}

/// Tests creating a recipe with an ingredient or tag that does not exist.
///
/// Expected: Err with UnknownIngredient or UnknownTag and nothing stored
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let recipe_service = RecipeService::new(&test.db);

    assert!(matches!(
        recipe_service
            .create_recipe(cook.id, recipe_payload("Bread", &[(1, 500), (9, 1)], &[2]))
            .await,
        Err(Error::ValidationError(ValidationError::UnknownIngredient(9)))
    ));
    assert!(matches!(
        recipe_service
            .create_recipe(cook.id, recipe_payload("Bread", &[(1, 500)], &[2, 8]))
            .await,
        Err(Error::ValidationError(ValidationError::UnknownTag(8)))
    ));
    assert_eq!(RecipeRepository::new(&test.db).count_by_author(cook.id).await?, 0);

    Ok(())
}

/// Tests payloads missing ingredients, tags or a name.
///
/// Expected: Err with the matching validation error
#[tokio::test]
async fn rejects_incomplete_payloads() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let recipe_service = RecipeService::new(&test.db);

    assert!(matches!(
        recipe_service
            .create_recipe(cook.id, recipe_payload("Air", &[], &[1]))
            .await,
        Err(Error::ValidationError(ValidationError::NoIngredients))
    ));
    assert!(matches!(
        recipe_service
            .create_recipe(cook.id, recipe_payload("Bread", &[(1, 500)], &[]))
            .await,
        Err(Error::ValidationError(ValidationError::NoTags))
    ));
    assert!(matches!(
        recipe_service
            .create_recipe(cook.id, recipe_payload("  ", &[(1, 500)], &[1]))
            .await,
        Err(Error::ValidationError(ValidationError::EmptyField("name")))
    ));
    assert!(matches!(
        recipe_service
            .create_recipe(cook.id, recipe_payload("Bread", &[(1, 0)], &[1]))
            .await,
        Err(Error::ValidationError(ValidationError::InvalidAmount { .. }))
    ));

    Ok(())
}

/// Tests that a partial update replaces the ingredient set and keeps other fields.
///
/// Expected: Ok with the new ingredients, the old name and the old tags
#[tokio::test]
async fn updates_ingredients_only() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test
        .recipe()
        .insert_recipe(cook.id, "Crepes", &[(1, 250), (2, 2)], &[1])
        .await?;

    let changes = UpdateRecipeDto {
        ingredients: Some(vec![IngredientAmountDto { id: 1, amount: 300 }]),
        ..Default::default()
    };
    let result = RecipeService::new(&test.db)
        .update_recipe(cook.id, recipe.id, changes)
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.name, "Crepes");
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.ingredients.len(), 1);
    assert_eq!(updated.ingredients[0].id, 1);
    assert_eq!(updated.ingredients[0].amount, 300);

    Ok(())
}

/// Tests editing and deleting another user's recipe.
///
/// Expected: Err with PermissionDenied for both and the recipe untouched
#[tokio::test]
async fn forbids_changing_foreign_recipe() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let intruder = test.user().insert_user("intruder").await?;
    let recipe = test
        .recipe()
        .insert_recipe(cook.id, "Crepes", &[(1, 250)], &[1])
        .await?;

    let recipe_service = RecipeService::new(&test.db);

    let changes = UpdateRecipeDto {
        name: Some("Stolen crepes".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        recipe_service
            .update_recipe(intruder.id, recipe.id, changes)
            .await,
        Err(Error::AuthError(AuthError::PermissionDenied))
    ));
    assert!(matches!(
        recipe_service.delete_recipe(intruder.id, recipe.id).await,
        Err(Error::AuthError(AuthError::PermissionDenied))
    ));

    let stored = recipe_service.get_recipe(None, recipe.id).await.unwrap();
    assert_eq!(stored.name, "Crepes");

    Ok(())
}

/// Tests deleting an own recipe.
///
/// Expected: Ok and the recipe is gone
#[tokio::test]
async fn deletes_own_recipe() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test
        .recipe()
        .insert_recipe(cook.id, "Crepes", &[(1, 250)], &[1])
        .await?;

    let recipe_service = RecipeService::new(&test.db);

    assert!(recipe_service.delete_recipe(cook.id, recipe.id).await.is_ok());
    assert!(matches!(
        recipe_service.get_recipe(None, recipe.id).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}

/// Tests the feed filters by tag and favorites, newest first.
///
/// Expected: tag filter matches any listed slug, favorite filter only the viewer's favorites
#[tokio::test]
async fn filters_feed() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let porridge = test
        .recipe()
        .insert_recipe(cook.id, "Porridge", &[(1, 50)], &[1])
        .await?;
    let roast = test
        .recipe()
        .insert_recipe(cook.id, "Roast", &[(1, 50)], &[2])
        .await?;
    let brunch = test
        .recipe()
        .insert_recipe(cook.id, "Brunch", &[(2, 2)], &[1, 2])
        .await?;
    test.recipe().insert_favorite(cook.id, roast.id).await?;

    let recipe_service = RecipeService::new(&test.db);
    let page = PageRequest { page: 1, limit: 6 };

    let (all, count) = recipe_service
        .get_recipes(Some(cook.id), &RecipeFilter::default(), page)
        .await
        .unwrap();
    assert_eq!(count, 3);
    let ids: Vec<i32> = all.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![brunch.id, roast.id, porridge.id]);

    let breakfast = RecipeFilter {
        tag_slugs: vec!["breakfast".to_string()],
        ..Default::default()
    };
    let (tagged, count) = recipe_service
        .get_recipes(None, &breakfast, page)
        .await
        .unwrap();
    assert_eq!(count, 2);
    let ids: Vec<i32> = tagged.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![brunch.id, porridge.id]);

    let favorites = RecipeFilter {
        favorited_by: Some(cook.id),
        ..Default::default()
    };
    let (favorited, count) = recipe_service
        .get_recipes(Some(cook.id), &favorites, page)
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(favorited[0].id, roast.id);
    assert!(favorited[0].is_favorited);

    Ok(())
}

/// Tests paging through the feed.
///
/// Expected: second page of size 2 holds the oldest recipe
#[tokio::test]
async fn paginates_feed() -> Result<(), TestError> {
    let mut test = kitchen().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let oldest = test
        .recipe()
        .insert_recipe(cook.id, "One", &[(1, 1)], &[1])
        .await?;
    test.recipe()
        .insert_recipe(cook.id, "Two", &[(1, 1)], &[1])
        .await?;
    test.recipe()
        .insert_recipe(cook.id, "Three", &[(1, 1)], &[1])
        .await?;

    let (recipes, count) = RecipeService::new(&test.db)
        .get_recipes(None, &RecipeFilter::default(), PageRequest { page: 2, limit: 2 })
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].id, oldest.id);

    Ok(())
}
