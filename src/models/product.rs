//! Product model
//!
//! A product with a nutrient profile stated per serving size.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// A product with nutritional information per `serving_size` grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// Reference quantity in grams the nutrient values describe (default 100)
    #[serde(default = "default_serving_size")]
    pub serving_size: f64,
    #[serde(flatten)]
    pub nutrients: NutrientProfile,
}

fn default_serving_size() -> f64 {
    100.0
}

impl Product {
    pub fn new(name: impl Into<String>, serving_size: f64, nutrients: NutrientProfile) -> Self {
        Self {
            id: None,
            name: name.into(),
            serving_size,
            nutrients,
        }
    }

    /// Nutrition for `amount` grams of this product
    pub fn nutrition_for(&self, amount: f64) -> NutrientProfile {
        crate::nutrition::product_nutrition(self, amount)
    }

    /// Nutrition normalised to 100 g
    pub fn per_100g(&self) -> NutrientProfile {
        self.nutrition_for(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_record_fills_defaults() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Oats",
            "energy_kcal": 370,
            "proteins": 13.5
        }))
        .unwrap();

        assert_eq!(product.id, Some(7));
        assert_eq!(product.serving_size, 100.0);
        assert_eq!(product.nutrients.energy_kcal, 370.0);
        assert_eq!(product.nutrients.sugars, 0.0);
    }

    #[test]
    fn test_product_record_round_trip_is_flat() {
        let product = Product::new(
            "Yoghurt",
            125.0,
            NutrientProfile {
                energy_kcal: 75.0,
                ..NutrientProfile::zero()
            },
        );
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["energy_kcal"], 75.0);
        assert_eq!(value["serving_size"], 125.0);
    }

    #[test]
    fn test_per_100g() {
        let product = Product::new(
            "Cracker",
            25.0,
            NutrientProfile {
                energy_kcal: 100.0,
                fats: 1.5,
                ..NutrientProfile::zero()
            },
        );
        let per_100 = product.per_100g();
        assert!((per_100.energy_kcal - 400.0).abs() < 0.001);
        assert!((per_100.fats - 6.0).abs() < 0.001);
    }
}
