//! Chart data derived from food log entries
//!
//! Per-meal breakdowns and macronutrient splits. Display tables are plain
//! values handed in by the caller.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::aggregate::entry_nutrition;
use crate::models::{round_to, FoodLogEntry, Nutrient, NutrientProfile};

/// Label and color of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStyle {
    pub label: String,
    pub color: String,
}

/// Display table for category keys such as meal slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub categories: IndexMap<String, CategoryStyle>,
    /// Key used for entries that carry no category or an empty one
    pub default_key: String,
    /// Color for keys missing from `categories`; their label is the key itself
    pub fallback_color: String,
}

impl Default for CategoryTable {
    fn default() -> Self {
        let categories = [
            ("ontbijt", "Breakfast", "#f59e0b"),
            ("lunch", "Lunch", "#10b981"),
            ("diner", "Dinner", "#3b82f6"),
            ("tussendoortje", "Snack", "#8b5cf6"),
        ]
        .into_iter()
        .map(|(key, label, color)| {
            (
                key.to_string(),
                CategoryStyle {
                    label: label.to_string(),
                    color: color.to_string(),
                },
            )
        })
        .collect();

        Self {
            categories,
            default_key: "tussendoortje".to_string(),
            fallback_color: "#6b7280".to_string(),
        }
    }
}

impl CategoryTable {
    /// Style for `key`, falling back to the key as label and the fallback color
    pub fn style_for(&self, key: &str) -> CategoryStyle {
        self.categories.get(key).cloned().unwrap_or_else(|| CategoryStyle {
            label: key.to_string(),
            color: self.fallback_color.clone(),
        })
    }
}

/// Colors and labels of the macronutrient split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroPalette {
    pub proteins: CategoryStyle,
    pub carbohydrates: CategoryStyle,
    pub fats: CategoryStyle,
}

impl Default for MacroPalette {
    fn default() -> Self {
        let style = |label: &str, color: &str| CategoryStyle {
            label: label.to_string(),
            color: color.to_string(),
        };
        Self {
            proteins: style("Proteins", "#dc2626"),
            carbohydrates: style("Carbohydrates", "#d97706"),
            fats: style("Fats", "#16a34a"),
        }
    }
}

/// One slice of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Sum `nutrient` per category in first-seen order.
///
/// Totals are rounded to the nutrient's display precision and categories whose
/// rounded total is zero or negative are dropped.
pub fn bucket_by_category(
    entries: &[FoodLogEntry],
    nutrient: Nutrient,
    table: &CategoryTable,
) -> Vec<ChartSlice> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();

    for entry in entries {
        let key = entry
            .meal_type
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(&table.default_key);
        *totals.entry(key).or_insert(0.0) += entry_nutrition(entry).get(nutrient);
    }

    let precision = nutrient.display_precision();
    totals
        .into_iter()
        .map(|(key, total)| (key, round_to(total, precision)))
        .filter(|(_, value)| *value > 0.0)
        .map(|(key, value)| {
            let style = table.style_for(key);
            ChartSlice {
                key: key.to_string(),
                label: style.label,
                value,
                color: style.color,
            }
        })
        .collect()
}

/// Proteins, carbohydrates and fats of a profile as chart slices
pub fn macronutrient_split(profile: &NutrientProfile, palette: &MacroPalette) -> Vec<ChartSlice> {
    [
        (Nutrient::Proteins, &palette.proteins),
        (Nutrient::Carbohydrates, &palette.carbohydrates),
        (Nutrient::Fats, &palette.fats),
    ]
    .into_iter()
    .map(|(nutrient, style)| ChartSlice {
        key: nutrient.as_str().to_string(),
        label: style.label.clone(),
        value: profile.get(nutrient),
        color: style.color.clone(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, Recipe};
    use crate::records::FoodLogEntryRecord;

    fn product(kcal: f64, carbs: f64) -> Product {
        Product::new(
            "Test",
            100.0,
            NutrientProfile {
                energy_kcal: kcal,
                carbohydrates: carbs,
                ..NutrientProfile::zero()
            },
        )
    }

    #[test]
    fn test_buckets_follow_first_seen_order() {
        let entries = vec![
            FoodLogEntry::product(product(300.0, 40.0), 100.0).in_meal("diner"),
            FoodLogEntry::product(product(100.0, 10.0), 100.0).in_meal("ontbijt"),
            FoodLogEntry::product(product(50.0, 5.0), 100.0).in_meal("diner"),
        ];

        let slices = bucket_by_category(&entries, Nutrient::EnergyKcal, &CategoryTable::default());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].key, "diner");
        assert_eq!(slices[0].label, "Dinner");
        assert_eq!(slices[0].value, 350.0);
        assert_eq!(slices[0].color, "#3b82f6");
        assert_eq!(slices[1].key, "ontbijt");
        assert_eq!(slices[1].value, 100.0);
    }

    #[test]
    fn test_missing_and_unknown_categories() {
        let entries = vec![
            FoodLogEntry::product(product(80.0, 0.0), 100.0),
            FoodLogEntry::product(product(120.0, 0.0), 100.0).in_meal("brunch"),
        ];

        let slices = bucket_by_category(&entries, Nutrient::EnergyKcal, &CategoryTable::default());
        assert_eq!(slices[0].key, "tussendoortje");
        assert_eq!(slices[0].label, "Snack");
        assert_eq!(slices[1].label, "brunch");
        assert_eq!(slices[1].color, "#6b7280");
    }

    #[test]
    fn test_meal_slot_records_use_builtin_styles() {
        let records: Vec<FoodLogEntryRecord> = serde_json::from_value(serde_json::json!([
            { "amount": 100, "meal_type": "ontbijt", "product": { "energy_kcal": 250 } },
            { "amount": 100, "meal_type": "diner", "product": { "energy_kcal": 600 } },
            { "amount": 100, "product": { "energy_kcal": 90 } },
            { "amount": 100, "meal_type": "", "product": { "energy_kcal": 60 } }
        ]))
        .unwrap();
        let entries: Vec<FoodLogEntry> = records.into_iter().map(FoodLogEntry::from).collect();

        let slices = bucket_by_category(&entries, Nutrient::EnergyKcal, &CategoryTable::default());
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].key, "ontbijt");
        assert_eq!(slices[0].label, "Breakfast");
        assert_eq!(slices[0].color, "#f59e0b");
        assert_eq!(slices[1].key, "diner");
        assert_eq!(slices[1].label, "Dinner");
        assert_eq!(slices[1].color, "#3b82f6");
        assert_eq!(slices[2].key, "tussendoortje");
        assert_eq!(slices[2].label, "Snack");
        assert_eq!(slices[2].value, 150.0);
        assert!(slices.iter().all(|s| s.color != "#6b7280"));
    }

    #[test]
    fn test_rounding_and_zero_filter() {
        let entries = vec![
            FoodLogEntry::product(product(0.4, 12.34), 100.0).in_meal("lunch"),
            FoodLogEntry::product(product(0.0, 0.0), 100.0).in_meal("diner"),
            FoodLogEntry::unresolved(100.0).in_meal("ontbijt"),
        ];
        let table = CategoryTable::default();

        let kcal = bucket_by_category(&entries, Nutrient::EnergyKcal, &table);
        assert!(kcal.is_empty());

        let carbs = bucket_by_category(&entries, Nutrient::Carbohydrates, &table);
        assert_eq!(carbs.len(), 1);
        assert_eq!(carbs[0].key, "lunch");
        assert_eq!(carbs[0].value, 12.3);
    }

    #[test]
    fn test_buckets_use_entry_nutrition_for_recipes() {
        let recipe = Recipe::new("Pasta", 2.0).with_ingredient(product(400.0, 60.0), 250.0);
        let entries = vec![FoodLogEntry::recipe(recipe, 1.0).in_meal("diner")];

        let slices = bucket_by_category(&entries, Nutrient::EnergyKcal, &CategoryTable::default());
        assert_eq!(slices[0].value, 500.0);
    }

    #[test]
    fn test_macronutrient_split() {
        let profile = NutrientProfile {
            proteins: 15.0,
            carbohydrates: 30.0,
            fats: 12.0,
            ..NutrientProfile::zero()
        };
        let slices = macronutrient_split(&profile, &MacroPalette::default());

        let keys: Vec<_> = slices.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["proteins", "carbohydrates", "fats"]);
        assert_eq!(slices[1].value, 30.0);
        assert_eq!(slices[2].color, "#16a34a");
    }
}
