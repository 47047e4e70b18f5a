//! Recipe model
//!
//! A recipe is an ordered list of product quantities yielding a number of servings.

use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::{NutrientProfile, Product};

/// A recipe with its ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// Number of portions the recipe yields
    #[serde(default = "default_servings")]
    pub servings: f64,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

fn default_servings() -> f64 {
    1.0
}

/// A product quantity within a recipe.
///
/// `product` is `None` until the data layer has resolved `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RecipeIngredient {
    #[serde(default)]
    pub product_id: Option<i64>,
    /// Quantity in the product's serving-size unit (grams)
    #[serde(default, deserialize_with = "crate::models::zero_if_null")]
    pub amount: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub product: Option<Product>,
}

pub(crate) fn default_unit() -> String {
    "gram".to_string()
}

impl Recipe {
    pub fn new(name: impl Into<String>, servings: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Append an ingredient backed by a resolved product
    pub fn with_ingredient(mut self, product: Product, amount: f64) -> Self {
        self.ingredients.push(RecipeIngredient::resolved(product, amount));
        self
    }

    /// Nutrition of the whole recipe
    pub fn total_nutrition(&self) -> NutrientProfile {
        crate::nutrition::recipe_total_nutrition(self)
    }

    /// Nutrition of one serving
    pub fn serving_nutrition(&self) -> NutrientProfile {
        crate::nutrition::recipe_serving_nutrition(self)
    }
}

impl RecipeIngredient {
    pub fn resolved(product: Product, amount: f64) -> Self {
        Self {
            product_id: product.id,
            amount,
            unit: default_unit(),
            product: Some(product),
        }
    }

    pub fn unresolved(product_id: i64, amount: f64) -> Self {
        Self {
            product_id: Some(product_id),
            amount,
            unit: default_unit(),
            product: None,
        }
    }
}
