//! Nutrition aggregation
//!
//! Product → recipe → entry → day. Every function is pure; inputs are never
//! mutated and unresolved references contribute the zero profile.

use crate::models::{EntrySource, FoodLogEntry, NutrientProfile, Product, Recipe};

/// Nutrition for `amount` of a product.
///
/// `amount / serving_size` scales the product's profile. A zero serving size
/// yields non-finite fields rather than an error.
pub fn product_nutrition(product: &Product, amount: f64) -> NutrientProfile {
    let factor = amount / product.serving_size;
    product.nutrients.scale(factor)
}

/// Nutrition of a whole recipe: the sum of its resolved ingredients
pub fn recipe_total_nutrition(recipe: &Recipe) -> NutrientProfile {
    recipe
        .ingredients
        .iter()
        .filter_map(|ingredient| match &ingredient.product {
            Some(product) => Some(product_nutrition(product, ingredient.amount)),
            None => {
                tracing::debug!(
                    recipe = %recipe.name,
                    product_id = ?ingredient.product_id,
                    "Skipping unresolved ingredient"
                );
                None
            }
        })
        .sum()
}

/// Nutrition of one serving of a recipe
pub fn recipe_serving_nutrition(recipe: &Recipe) -> NutrientProfile {
    recipe_total_nutrition(recipe).divide(recipe.servings)
}

/// Nutrition actually consumed by a food log entry.
///
/// Recipe-backed entries treat `amount` as a serving count whatever the unit says.
pub fn entry_nutrition(entry: &FoodLogEntry) -> NutrientProfile {
    match &entry.source {
        EntrySource::Product(product) => product_nutrition(product, entry.amount),
        EntrySource::Recipe(recipe) => recipe_serving_nutrition(recipe).scale(entry.amount),
        EntrySource::Unresolved => {
            tracing::debug!(entry_id = ?entry.id, "Entry has no resolved source");
            NutrientProfile::zero()
        }
    }
}

/// Total nutrition over a day's entries
pub fn daily_nutrition(entries: &[FoodLogEntry]) -> NutrientProfile {
    entries.iter().map(entry_nutrition).sum()
}
