//! Payload checks that need no database access.

use std::collections::HashSet;

use crate::{
    model::recipe::IngredientAmountDto,
    server::error::validation::ValidationError,
};

pub fn validate_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}

pub fn validate_cooking_time(cooking_time: i32) -> Result<(), ValidationError> {
    if cooking_time < 1 {
        return Err(ValidationError::InvalidCookingTime(cooking_time));
    }

    Ok(())
}

/// Checks the ingredient list and returns it as `(ingredient_id, amount)` pairs
pub fn validate_ingredients(
    ingredients: &[IngredientAmountDto],
) -> Result<Vec<(i32, i32)>, ValidationError> {
    if ingredients.is_empty() {
        return Err(ValidationError::NoIngredients);
    }

    let mut seen = HashSet::new();
    for ingredient in ingredients {
        if ingredient.amount < 1 {
            return Err(ValidationError::InvalidAmount {
                ingredient_id: ingredient.id,
                amount: ingredient.amount,
            });
        }
        if !seen.insert(ingredient.id) {
            return Err(ValidationError::DuplicateIngredient(ingredient.id));
        }
    }

    Ok(ingredients.iter().map(|i| (i.id, i.amount)).collect())
}

pub fn validate_tags(tag_ids: &[i32]) -> Result<(), ValidationError> {
    if tag_ids.is_empty() {
        return Err(ValidationError::NoTags);
    }

    let mut seen = HashSet::new();
    for &tag_id in tag_ids {
        if !seen.insert(tag_id) {
            return Err(ValidationError::DuplicateTag(tag_id));
        }
    }

    Ok(())
}
