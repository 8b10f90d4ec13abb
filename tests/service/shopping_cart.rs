//! Tests for ShoppingCartService add and remove.

use foodgram::server::{
    data::shopping_cart::ShoppingCartRepository,
    error::{relation::RelationError, Error},
    service::shopping_cart::ShoppingCartService,
};
use foodgram_test_utils::prelude::*;

/// Tests adding a recipe to the cart.
///
/// Expected: Ok with the short representation and a stored cart entry
#[tokio::test]
async fn adds_recipe_to_cart() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Stew", &[], &[]).await?;

    let result = ShoppingCartService::new(&test.db)
        .add(cook.id, recipe.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, recipe.id);
    let in_cart = ShoppingCartRepository::new(&test.db)
        .exists(cook.id, recipe.id)
        .await?;
    assert!(in_cart);

    Ok(())
}

/// Tests adding the same recipe twice.
///
/// Expected: Err with AlreadyInCart
#[tokio::test]
async fn rejects_duplicate_cart_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Stew", &[], &[]).await?;
    test.recipe().insert_cart_entry(cook.id, recipe.id).await?;

    let result = ShoppingCartService::new(&test.db)
        .add(cook.id, recipe.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::RelationError(RelationError::AlreadyInCart))
    ));

    Ok(())
}

/// Tests removing a recipe that is not in the cart.
///
/// Expected: Err with NotInCart
#[tokio::test]
async fn rejects_removing_missing_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Stew", &[], &[]).await?;

    let result = ShoppingCartService::new(&test.db)
        .remove(cook.id, recipe.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::RelationError(RelationError::NotInCart))
    ));

    Ok(())
}

/// Tests removing a recipe from the cart.
///
/// Expected: Ok and the entry is gone
#[tokio::test]
async fn removes_cart_entry() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;
    let recipe = test.recipe().insert_recipe(cook.id, "Stew", &[], &[]).await?;
    test.recipe().insert_cart_entry(cook.id, recipe.id).await?;

    let result = ShoppingCartService::new(&test.db)
        .remove(cook.id, recipe.id)
        .await;

    assert!(result.is_ok());
    let in_cart = ShoppingCartRepository::new(&test.db)
        .exists(cook.id, recipe.id)
        .await?;
    assert!(!in_cart);

    Ok(())
}

/// Tests cart operations on a recipe that does not exist.
///
/// Expected: Err with NotFound for both add and remove
#[tokio::test]
async fn returns_not_found_for_unknown_recipe() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let cart_service = ShoppingCartService::new(&test.db);

    assert!(matches!(
        cart_service.add(cook.id, 7).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        cart_service.remove(cook.id, 7).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}
