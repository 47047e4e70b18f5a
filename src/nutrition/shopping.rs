//! Shopping list derivation
//!
//! Merges the ingredient lines of every planned recipe in a week menu.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::WeekMenu;

/// One line of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListItem {
    pub product_id: Option<i64>,
    pub product_name: String,
    pub amount: f64,
    pub unit: String,
    pub checked: bool,
}

/// Build the shopping list for a week menu.
///
/// Days without a recipe or opted out of shopping are skipped. Lines with the
/// same product and unit are merged; the result is sorted by product name.
pub fn shopping_list(menu: &WeekMenu) -> Vec<ShoppingListItem> {
    let mut lines: IndexMap<(Option<i64>, String), ShoppingListItem> = IndexMap::new();

    for day in &menu.days {
        if !day.add_to_shopping_list {
            continue;
        }
        let Some(recipe) = &day.recipe else {
            continue;
        };

        let multiplier = day.serving_multiplier();
        for ingredient in &recipe.ingredients {
            let product_id = ingredient
                .product_id
                .or_else(|| ingredient.product.as_ref().and_then(|p| p.id));
            let amount = ingredient.amount * multiplier;

            lines
                .entry((product_id, ingredient.unit.clone()))
                .and_modify(|line| line.amount += amount)
                .or_insert_with(|| ShoppingListItem {
                    product_id,
                    product_name: ingredient
                        .product
                        .as_ref()
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    amount,
                    unit: ingredient.unit.clone(),
                    checked: false,
                });
        }
    }

    let mut items: Vec<ShoppingListItem> = lines.into_values().collect();
    items.sort_by(|a, b| a.product_name.cmp(&b.product_name));
    items
}
