//! Status Tool
//!
//! Provides runtime status information about the meal planner service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage guide returned by the nutrition_instructions tool
pub const NUTRITION_INSTRUCTIONS: &str = r#"
# Meal Planner Nutrition Instructions

All tools are stateless. Send fully resolved records: every product and recipe
referenced by an entry or ingredient must be embedded, not just its id.

## Products

- `serving_size` is the reference quantity in grams the nutrient values describe
  (default 100).
- Nutrient fields: energy_kcal, proteins, carbohydrates, sugars, fats, fibers.
  Missing or null fields count as 0.
- `serving_size` must be greater than 0. A zero serving size produces
  non-finite results (returned as null).

## Recipes

- `servings` is the number of portions the recipe yields.
- Ingredient `amount` is in the product's serving-size unit (grams).
- Ingredients with `product: null` are skipped.

## Food log entries

- Product entries: `amount` is grams.
- Recipe entries: `amount` is the number of servings eaten, whatever `unit` says.
- Entries with neither product nor recipe contribute nothing.
- `meal_type` (ontbijt, lunch, diner, tussendoortje) groups entries in the
  per-meal breakdown. Entries without one, or with an empty one, count as
  tussendoortje.

## Week menus

- `shopping_list` merges ingredient lines by product and unit over every day
  that has a recipe and `add_to_shopping_list: true`.
- A day's `servings` scales the recipe's ingredients by servings / recipe servings.
- The response also lists the dates in the menu's range with no recipe planned.

Dates use ISO format: YYYY-MM-DD.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct MealPlanStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Chart config file in use, if any
    pub chart_config_path: Option<String>,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    chart_config_path: Option<PathBuf>,
}

impl StatusTracker {
    pub fn new(chart_config_path: Option<PathBuf>) -> Self {
        Self {
            start_time: Instant::now(),
            chart_config_path,
        }
    }

    pub fn get_status(&self) -> MealPlanStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MealPlanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            chart_config_path: self
                .chart_config_path
                .as_ref()
                .map(|p| p.display().to_string()),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new(Some(PathBuf::from("/etc/mealplan/charts.json")));
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(
            status.chart_config_path.as_deref(),
            Some("/etc/mealplan/charts.json")
        );
    }
}
