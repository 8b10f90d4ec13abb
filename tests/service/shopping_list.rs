//! Tests for ShoppingListService.
//!
//! Verifies aggregation of cart ingredients per name and unit, and that the PDF export
//! succeeds for both empty and filled carts.

use foodgram::server::{
    service::shopping_list::ShoppingListService,
    util::{pdf::ShoppingListRenderer, shopping_list::ShoppingListItem},
};
use foodgram_test_utils::prelude::*;

fn item(name: &str, measurement_unit: &str, amount: i64) -> ShoppingListItem {
    ShoppingListItem {
        name: name.to_string(),
        measurement_unit: measurement_unit.to_string(),
        amount,
    }
}

/// Tests the overlapping cart scenario.
///
/// Recipe A needs flour 200 g and sugar 50 g, recipe B needs flour 100 g and 2 eggs. The
/// list must contain each ingredient exactly once with summed amounts.
///
/// Expected: flour 300 g, sugar 50 g, egg 2 pcs
#[tokio::test]
async fn sums_overlapping_ingredients() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("flour", "g")
        .with_ingredient("sugar", "g")
        .with_ingredient("egg", "pcs")
        .build()
        .await?;
    let cook = test.user().insert_user("cook").await?;
    let a = test
        .recipe()
        .insert_recipe(cook.id, "Shortbread", &[(1, 200), (2, 50)], &[])
        .await?;
    let b = test
        .recipe()
        .insert_recipe(cook.id, "Pancakes", &[(1, 100), (3, 2)], &[])
        .await?;
    test.recipe().insert_cart_entry(cook.id, a.id).await?;
    test.recipe().insert_cart_entry(cook.id, b.id).await?;

    let items = ShoppingListService::new(&test.db)
        .get_items(cook.id)
        .await
        .unwrap();

    assert_eq!(
        items,
        vec![
            item("flour", "g", 300),
            item("sugar", "g", 50),
            item("egg", "pcs", 2),
        ]
    );

    Ok(())
}

/// Tests that an empty cart yields no items.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_list_for_empty_cart() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let items = ShoppingListService::new(&test.db)
        .get_items(cook.id)
        .await
        .unwrap();

    assert!(items.is_empty());

    Ok(())
}

/// Tests that only the requesting user's cart is aggregated.
///
/// Expected: Ok with the lines of the user's own cart
#[tokio::test]
async fn ignores_other_users_carts() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("rice", "g")
        .with_ingredient("salt", "pinch")
        .build()
        .await?;
    let cook = test.user().insert_user("cook").await?;
    let guest = test.user().insert_user("guest").await?;
    let risotto = test
        .recipe()
        .insert_recipe(cook.id, "Risotto", &[(1, 300)], &[])
        .await?;
    let brine = test
        .recipe()
        .insert_recipe(cook.id, "Brine", &[(2, 4)], &[])
        .await?;
    test.recipe().insert_cart_entry(cook.id, risotto.id).await?;
    test.recipe().insert_cart_entry(guest.id, brine.id).await?;

    let items = ShoppingListService::new(&test.db)
        .get_items(cook.id)
        .await
        .unwrap();

    assert_eq!(items, vec![item("rice", "g", 300)]);

    Ok(())
}

/// Tests that the same ingredient name with different units stays on separate lines.
///
/// Expected: two milk lines
#[tokio::test]
async fn keeps_units_apart() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("milk", "ml")
        .with_ingredient("milk", "cup")
        .build()
        .await?;
    let cook = test.user().insert_user("cook").await?;
    let latte = test
        .recipe()
        .insert_recipe(cook.id, "Latte", &[(1, 200), (2, 1)], &[])
        .await?;
    test.recipe().insert_cart_entry(cook.id, latte.id).await?;

    let items = ShoppingListService::new(&test.db)
        .get_items(cook.id)
        .await
        .unwrap();

    assert_eq!(items, vec![item("milk", "ml", 200), item("milk", "cup", 1)]);

    Ok(())
}

/// Tests exporting an empty cart.
///
/// Expected: Ok with a PDF document
#[tokio::test]
async fn exports_empty_cart_as_pdf() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_recipe_tables().build().await?;
    let cook = test.user().insert_user("cook").await?;

    let pdf = ShoppingListService::new(&test.db)
        .export_pdf(cook.id, &ShoppingListRenderer::default())
        .await
        .unwrap();

    assert!(pdf.starts_with(b"%PDF"));

    Ok(())
}

/// Tests exporting a filled cart.
///
/// Expected: Ok with a PDF document
#[tokio::test]
async fn exports_filled_cart_as_pdf() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_recipe_tables()
        .with_ingredient("flour", "g")
        .build()
        .await?;
    let cook = test.user().insert_user("cook").await?;
    let bread = test
        .recipe()
        .insert_recipe(cook.id, "Bread", &[(1, 500)], &[])
        .await?;
    test.recipe().insert_cart_entry(cook.id, bread.id).await?;

    let pdf = ShoppingListService::new(&test.db)
        .export_pdf(cook.id, &ShoppingListRenderer::default())
        .await
        .unwrap();

    assert!(pdf.starts_with(b"%PDF"));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = ShoppingListService::new(&test.db).get_items(1).await;

    assert!(result.is_err());

    Ok(())
}
