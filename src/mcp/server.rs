//! Meal planner MCP Server Implementation
//!
//! Exposes the nutrition engine as stateless MCP tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ChartConfig;
use crate::models::{Nutrient, NutrientProfile, Product, Recipe};
use crate::records::{DailyFoodLogRecord, FoodLogEntryRecord, WeekMenuRecord};
use crate::tools::nutrition;
use crate::tools::status::StatusTracker;

/// Meal planner MCP Service
#[derive(Clone)]
pub struct MealPlanService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    chart_config: Arc<ChartConfig>,
    tool_router: ToolRouter<MealPlanService>,
}

impl MealPlanService {
    pub fn new(chart_config: ChartConfig, chart_config_path: Option<PathBuf>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(chart_config_path))),
            chart_config: Arc::new(chart_config),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProductNutritionParams {
    /// Product record with nutrients per serving_size grams
    pub product: Product,
    /// Consumed amount in grams
    pub amount: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeNutritionParams {
    /// Recipe record with resolved ingredient products
    pub recipe: Recipe,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EntryNutritionParams {
    /// Food log entry with its product or recipe embedded
    pub entry: FoodLogEntryRecord,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DayNutritionParams {
    /// Daily food log with date (YYYY-MM-DD) and resolved entries
    pub log: DailyFoodLogRecord,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealBreakdownParams {
    /// Entries tagged with meal_type
    pub entries: Vec<FoodLogEntryRecord>,
    /// Nutrient to total per meal (default energy_kcal)
    #[serde(default = "default_nutrient")]
    pub nutrient: Nutrient,
}

fn default_nutrient() -> Nutrient {
    Nutrient::EnergyKcal
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MacronutrientSplitParams {
    /// Nutrition totals to split
    pub nutrition: NutrientProfile,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ShoppingListParams {
    /// Week menu with resolved recipes per day
    pub menu: WeekMenuRecord,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MealPlanService {
    // --- Status ---

    #[tool(description = "Get the current status of the meal planner service including build info and process information")]
    async fn mealplan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for the record formats the nutrition tools expect. Call this before the first calculation.")]
    fn nutrition_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::NUTRITION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(NUTRITION_INSTRUCTIONS)]))
    }

    // --- Calculations ---

    #[tool(description = "Calculate nutrition for an amount (grams) of a product, plus its per-100g values")]
    fn product_nutrition(&self, Parameters(p): Parameters<ProductNutritionParams>) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::product_nutrition(&p.product, p.amount))
    }

    #[tool(description = "Calculate whole-recipe and per-serving nutrition. Ingredients without a resolved product are skipped.")]
    fn recipe_nutrition(&self, Parameters(p): Parameters<RecipeNutritionParams>) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::recipe_nutrition(&p.recipe))
    }

    #[tool(description = "Calculate consumed nutrition for one food log entry. Product amounts are grams, recipe amounts are servings.")]
    fn entry_nutrition(&self, Parameters(p): Parameters<EntryNutritionParams>) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::entry_nutrition_tool(p.entry))
    }

    #[tool(description = "Calculate day totals for a food log, with per-entry nutrition, per-meal calorie and carbohydrate breakdowns, and the macronutrient split")]
    fn day_nutrition(&self, Parameters(p): Parameters<DayNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::day_nutrition(p.log, &self.chart_config)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Total one nutrient per meal type for chart display. Values are rounded and empty meals are omitted.")]
    fn meal_breakdown(&self, Parameters(p): Parameters<MealBreakdownParams>) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::meal_breakdown(p.entries, p.nutrient, &self.chart_config))
    }

    #[tool(description = "Split nutrition totals into protein, carbohydrate and fat chart slices")]
    fn macronutrient_split(&self, Parameters(p): Parameters<MacronutrientSplitParams>) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::macronutrients(&p.nutrition, &self.chart_config))
    }

    #[tool(description = "Generate a shopping list from a week menu, merging ingredients by product and unit")]
    fn shopping_list(&self, Parameters(p): Parameters<ShoppingListParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::week_shopping_list(p.menu)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MealPlanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mealplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Meal Planner".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Meal Planner - nutrition for products, recipes, food logs and week menus. \
                 Call nutrition_instructions first. All tools are stateless and take fully \
                 resolved records. \
                 Calculations: product_nutrition, recipe_nutrition, entry_nutrition, day_nutrition. \
                 Charts: meal_breakdown, macronutrient_split. \
                 Planning: shopping_list. \
                 Status: mealplan_status."
                    .into(),
            ),
        }
    }
}
