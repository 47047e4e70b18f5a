//! Nutrition MCP Tools
//!
//! Stateless calculations over records supplied by the caller.

use serde::Serialize;

use crate::config::ChartConfig;
use crate::models::{
    DailyFoodLog, EntryKind, FoodLogEntry, Nutrient, NutrientProfile, Product, Recipe, WeekMenu,
};
use crate::nutrition::{
    bucket_by_category, daily_nutrition, entry_nutrition, macronutrient_split,
    recipe_serving_nutrition, recipe_total_nutrition, shopping_list, ChartSlice, ShoppingListItem,
};
use crate::records::{DailyFoodLogRecord, FoodLogEntryRecord, WeekMenuRecord};

/// Response for product_nutrition
#[derive(Debug, Serialize)]
pub struct ProductNutritionResponse {
    pub name: String,
    pub amount: f64,
    pub serving_size: f64,
    pub nutrition: NutrientProfile,
    /// Per 100 g, rounded to one decimal for display
    pub per_100g: NutrientProfile,
}

/// Response for recipe_nutrition
#[derive(Debug, Serialize)]
pub struct RecipeNutritionResponse {
    pub name: String,
    pub servings: f64,
    pub ingredient_count: usize,
    pub unresolved_ingredients: usize,
    pub total: NutrientProfile,
    pub per_serving: NutrientProfile,
}

/// Response for entry_nutrition
#[derive(Debug, Serialize)]
pub struct EntryNutritionResponse {
    pub name: String,
    pub kind: EntryKind,
    pub amount: f64,
    pub unit: String,
    pub meal_type: Option<String>,
    pub nutrition: NutrientProfile,
}

impl EntryNutritionResponse {
    fn from_entry(entry: &FoodLogEntry) -> Self {
        Self {
            name: entry.name().to_string(),
            kind: entry.kind(),
            amount: entry.amount,
            unit: entry.unit.clone(),
            meal_type: entry.meal_type.clone(),
            nutrition: entry_nutrition(entry),
        }
    }
}

/// Response for day_nutrition
#[derive(Debug, Serialize)]
pub struct DayNutritionResponse {
    pub date: String,
    pub entry_count: usize,
    pub entries: Vec<EntryNutritionResponse>,
    pub total: NutrientProfile,
    pub meal_calories: Vec<ChartSlice>,
    pub meal_carbohydrates: Vec<ChartSlice>,
    pub macronutrients: Vec<ChartSlice>,
}

/// Response for meal_breakdown
#[derive(Debug, Serialize)]
pub struct MealBreakdownResponse {
    pub nutrient: Nutrient,
    pub slices: Vec<ChartSlice>,
}

/// Response for shopping_list
#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub start_date: String,
    pub end_date: String,
    pub items: Vec<ShoppingListItem>,
    pub total_items: usize,
    /// Dates in the range without a planned recipe
    pub unplanned_dates: Vec<String>,
}

fn warn_if_non_finite(context: &str, name: &str, nutrition: &NutrientProfile) {
    if !nutrition.is_finite() {
        tracing::warn!(
            "{} '{}' produced non-finite nutrition; check serving sizes and servings",
            context,
            name
        );
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

/// Nutrition for an amount (grams) of a product
pub fn product_nutrition(product: &Product, amount: f64) -> ProductNutritionResponse {
    let nutrition = product.nutrition_for(amount);
    warn_if_non_finite("Product", &product.name, &nutrition);

    ProductNutritionResponse {
        name: product.name.clone(),
        amount,
        serving_size: product.serving_size,
        nutrition,
        per_100g: product.per_100g().rounded(1),
    }
}

/// Whole-recipe and per-serving nutrition
pub fn recipe_nutrition(recipe: &Recipe) -> RecipeNutritionResponse {
    let per_serving = recipe_serving_nutrition(recipe);
    warn_if_non_finite("Recipe", &recipe.name, &per_serving);

    RecipeNutritionResponse {
        name: recipe.name.clone(),
        servings: recipe.servings,
        ingredient_count: recipe.ingredients.len(),
        unresolved_ingredients: recipe
            .ingredients
            .iter()
            .filter(|i| i.product.is_none())
            .count(),
        total: recipe_total_nutrition(recipe),
        per_serving,
    }
}

/// Consumed nutrition of a single food log entry
pub fn entry_nutrition_tool(record: FoodLogEntryRecord) -> EntryNutritionResponse {
    let entry = FoodLogEntry::from(record);
    let response = EntryNutritionResponse::from_entry(&entry);
    warn_if_non_finite("Entry", &response.name, &response.nutrition);
    response
}

/// Day totals with per-meal and macronutrient chart data
pub fn day_nutrition(
    record: DailyFoodLogRecord,
    config: &ChartConfig,
) -> Result<DayNutritionResponse, String> {
    let log = DailyFoodLog::try_from(record).map_err(|e| format!("Invalid food log: {}", e))?;

    let total = daily_nutrition(&log.entries);
    let date = log.date.format("%Y-%m-%d").to_string();
    warn_if_non_finite("Day", &date, &total);

    Ok(DayNutritionResponse {
        entry_count: log.entries.len(),
        entries: log
            .entries
            .iter()
            .map(EntryNutritionResponse::from_entry)
            .collect(),
        meal_calories: bucket_by_category(&log.entries, Nutrient::EnergyKcal, &config.meals),
        meal_carbohydrates: bucket_by_category(
            &log.entries,
            Nutrient::Carbohydrates,
            &config.meals,
        ),
        macronutrients: macronutrient_split(&total, &config.macronutrients),
        date,
        total,
    })
}

/// Per-meal totals of one nutrient
pub fn meal_breakdown(
    records: Vec<FoodLogEntryRecord>,
    nutrient: Nutrient,
    config: &ChartConfig,
) -> MealBreakdownResponse {
    let entries: Vec<FoodLogEntry> = records.into_iter().map(FoodLogEntry::from).collect();
    MealBreakdownResponse {
        nutrient,
        slices: bucket_by_category(&entries, nutrient, &config.meals),
    }
}

/// Macronutrient chart slices of a profile
pub fn macronutrients(profile: &NutrientProfile, config: &ChartConfig) -> Vec<ChartSlice> {
    macronutrient_split(profile, &config.macronutrients)
}

/// Shopping list for a week menu
pub fn week_shopping_list(record: WeekMenuRecord) -> Result<ShoppingListResponse, String> {
    let menu = WeekMenu::try_from(record).map_err(|e| format!("Invalid week menu: {}", e))?;
    let items = shopping_list(&menu);

    Ok(ShoppingListResponse {
        start_date: menu.start_date.format("%Y-%m-%d").to_string(),
        end_date: menu.end_date.format("%Y-%m-%d").to_string(),
        total_items: items.len(),
        items,
        unplanned_dates: menu
            .unplanned_dates()
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect(),
    })
}
