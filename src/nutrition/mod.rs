//! Nutrition calculation module
//!
//! Aggregation of nutrient profiles plus the chart and shopping views built on it.

pub mod aggregate;
pub mod buckets;
pub mod shopping;

pub use aggregate::{
    daily_nutrition, entry_nutrition, product_nutrition, recipe_serving_nutrition,
    recipe_total_nutrition,
};
pub use buckets::{
    bucket_by_category, macronutrient_split, CategoryStyle, CategoryTable, ChartSlice,
    MacroPalette,
};
pub use shopping::{shopping_list, ShoppingListItem};
