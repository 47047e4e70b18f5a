//! Food log models
//!
//! A daily food log holds entries, each consuming a product or a recipe.

use chrono::NaiveDate;
use serde::Serialize;

use super::{NutrientProfile, Product, Recipe};

/// What a food log entry consumed
#[derive(Debug, Clone, PartialEq)]
pub enum EntrySource {
    /// `amount` is in the product's serving-size unit (grams)
    Product(Product),
    /// `amount` is a number of recipe servings
    Recipe(Recipe),
    /// Neither reference was resolved by the data layer
    Unresolved,
}

/// Kind of an entry's source, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Product,
    Recipe,
    Unresolved,
}

/// A single consumption record
#[derive(Debug, Clone, PartialEq)]
pub struct FoodLogEntry {
    pub id: Option<i64>,
    pub source: EntrySource,
    pub amount: f64,
    /// Recorded unit. Informational; it never changes the computed nutrition.
    pub unit: String,
    /// Category key for per-meal breakdowns (ontbijt, lunch, ...)
    pub meal_type: Option<String>,
}

impl FoodLogEntry {
    pub fn product(product: Product, amount: f64) -> Self {
        Self {
            id: None,
            source: EntrySource::Product(product),
            amount,
            unit: "gram".to_string(),
            meal_type: None,
        }
    }

    pub fn recipe(recipe: Recipe, servings: f64) -> Self {
        Self {
            id: None,
            source: EntrySource::Recipe(recipe),
            amount: servings,
            unit: "serving".to_string(),
            meal_type: None,
        }
    }

    pub fn unresolved(amount: f64) -> Self {
        Self {
            id: None,
            source: EntrySource::Unresolved,
            amount,
            unit: "gram".to_string(),
            meal_type: None,
        }
    }

    pub fn in_meal(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    pub fn name(&self) -> &str {
        match &self.source {
            EntrySource::Product(product) => &product.name,
            EntrySource::Recipe(recipe) => &recipe.name,
            EntrySource::Unresolved => "Unknown",
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.source {
            EntrySource::Product(_) => EntryKind::Product,
            EntrySource::Recipe(_) => EntryKind::Recipe,
            EntrySource::Unresolved => EntryKind::Unresolved,
        }
    }

    pub fn nutrition(&self) -> NutrientProfile {
        crate::nutrition::entry_nutrition(self)
    }
}

/// All entries logged on one date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyFoodLog {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub entries: Vec<FoodLogEntry>,
}

impl DailyFoodLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            entries: Vec::new(),
        }
    }

    pub fn total_nutrition(&self) -> NutrientProfile {
        crate::nutrition::daily_nutrition(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_and_kind() {
        let product = Product::new("Apple", 100.0, NutrientProfile::zero());
        let entry = FoodLogEntry::product(product, 150.0).in_meal("tussendoortje");
        assert_eq!(entry.name(), "Apple");
        assert_eq!(entry.kind(), EntryKind::Product);
        assert_eq!(entry.meal_type.as_deref(), Some("tussendoortje"));

        let entry = FoodLogEntry::recipe(Recipe::new("Stew", 4.0), 1.0);
        assert_eq!(entry.name(), "Stew");
        assert_eq!(entry.kind(), EntryKind::Recipe);
        assert_eq!(serde_json::to_value(entry.kind()).unwrap(), "recipe");
        assert_eq!(entry.unit, "serving");

        let entry = FoodLogEntry::unresolved(10.0);
        assert_eq!(entry.name(), "Unknown");
        assert_eq!(entry.kind(), EntryKind::Unresolved);
    }

    #[test]
    fn test_empty_day() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let log = DailyFoodLog::new(date);
        assert_eq!(log.total_nutrition(), NutrientProfile::zero());
    }
}
