//! Data models
//!
//! Products, recipes, food logs and week menus as resolved in-memory aggregates.

mod food_log;
mod nutrition;
mod product;
mod recipe;
mod week_menu;

pub use food_log::{DailyFoodLog, EntryKind, EntrySource, FoodLogEntry};
pub use nutrition::{round_to, Nutrient, NutrientProfile};
pub(crate) use nutrition::zero_if_null;
pub use product::Product;
pub use recipe::{Recipe, RecipeIngredient};
pub use week_menu::{MenuDay, WeekMenu};
