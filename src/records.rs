//! Wire records
//!
//! Plain records as delivered by the data layer, and their conversion into
//! the resolved models. Products and recipes deserialize directly; entries and
//! menus need a conversion step to pick their source and parse dates.

use chrono::NaiveDate;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    zero_if_null, DailyFoodLog, EntrySource, FoodLogEntry, MenuDay, Product, Recipe, WeekMenu,
};

/// Record conversion errors
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type RecordResult<T> = Result<T, RecordError>;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> RecordResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        RecordError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

fn default_entry_unit() -> String {
    "gram".to_string()
}

fn default_true() -> bool {
    true
}

/// A food log entry as sent by the data layer
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FoodLogEntryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub recipe_id: Option<i64>,
    /// Grams for products, servings for recipes
    #[serde(default, deserialize_with = "zero_if_null")]
    pub amount: f64,
    #[serde(default = "default_entry_unit")]
    pub unit: String,
    /// Meal slot (ontbijt, lunch, diner, tussendoortje)
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
}

impl From<FoodLogEntryRecord> for FoodLogEntry {
    fn from(record: FoodLogEntryRecord) -> Self {
        // A resolved product wins over a resolved recipe
        let source = match (record.product, record.recipe) {
            (Some(product), _) => EntrySource::Product(product),
            (None, Some(recipe)) => EntrySource::Recipe(recipe),
            (None, None) => EntrySource::Unresolved,
        };

        Self {
            id: record.id,
            source,
            amount: record.amount,
            unit: record.unit,
            meal_type: record.meal_type,
        }
    }
}

/// A daily food log as sent by the data layer
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DailyFoodLogRecord {
    #[serde(default)]
    pub id: Option<i64>,
    /// Date (YYYY-MM-DD)
    pub date: String,
    #[serde(default)]
    pub entries: Vec<FoodLogEntryRecord>,
}

impl TryFrom<DailyFoodLogRecord> for DailyFoodLog {
    type Error = RecordError;

    fn try_from(record: DailyFoodLogRecord) -> RecordResult<Self> {
        Ok(Self {
            id: record.id,
            date: parse_date(&record.date)?,
            entries: record.entries.into_iter().map(FoodLogEntry::from).collect(),
        })
    }
}

/// A planned menu day as sent by the data layer
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MenuDayRecord {
    /// Date (YYYY-MM-DD)
    pub date: String,
    #[serde(default)]
    pub recipe_id: Option<i64>,
    #[serde(default)]
    pub recipe: Option<Recipe>,
    /// Portions to cook (defaults to the recipe's own yield)
    #[serde(default)]
    pub servings: Option<f64>,
    #[serde(default = "default_true")]
    pub add_to_shopping_list: bool,
}

impl TryFrom<MenuDayRecord> for MenuDay {
    type Error = RecordError;

    fn try_from(record: MenuDayRecord) -> RecordResult<Self> {
        Ok(Self {
            date: parse_date(&record.date)?,
            recipe: record.recipe,
            servings: record.servings,
            add_to_shopping_list: record.add_to_shopping_list,
        })
    }
}

/// A week menu as sent by the data layer
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WeekMenuRecord {
    #[serde(default)]
    pub id: Option<i64>,
    /// Start date (YYYY-MM-DD)
    pub start_date: String,
    /// End date (YYYY-MM-DD)
    pub end_date: String,
    #[serde(default)]
    pub days: Vec<MenuDayRecord>,
}

impl TryFrom<WeekMenuRecord> for WeekMenu {
    type Error = RecordError;

    fn try_from(record: WeekMenuRecord) -> RecordResult<Self> {
        Ok(Self {
            id: record.id,
            start_date: parse_date(&record.start_date)?,
            end_date: parse_date(&record.end_date)?,
            days: record
                .days
                .into_iter()
                .map(MenuDay::try_from)
                .collect::<RecordResult<Vec<_>>>()?,
        })
    }
}
