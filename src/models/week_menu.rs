//! Week menu model
//!
//! A planned recipe per day over a date range.

use chrono::NaiveDate;

use super::Recipe;

#[derive(Debug, Clone, PartialEq)]
pub struct WeekMenu {
    pub id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<MenuDay>,
}

/// One planned day
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDay {
    pub date: NaiveDate,
    pub recipe: Option<Recipe>,
    /// Portions to cook; `None` means the recipe's own yield
    pub servings: Option<f64>,
    pub add_to_shopping_list: bool,
}

impl WeekMenu {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: None,
            start_date,
            end_date,
            days: Vec::new(),
        }
    }

    pub fn day_by_date(&self, date: NaiveDate) -> Option<&MenuDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Dates in the menu's range with no recipe planned
    pub fn unplanned_dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .filter(|date| {
                self.day_by_date(*date)
                    .map_or(true, |day| day.recipe.is_none())
            })
            .collect()
    }
}

impl MenuDay {
    pub fn planned(date: NaiveDate, recipe: Recipe, servings: Option<f64>) -> Self {
        Self {
            date,
            recipe: Some(recipe),
            servings,
            add_to_shopping_list: true,
        }
    }

    /// How much of the recipe's ingredient list this day needs
    pub fn serving_multiplier(&self) -> f64 {
        match (&self.recipe, self.servings) {
            (Some(recipe), Some(servings)) if servings != 0.0 => servings / recipe.servings,
            _ => 1.0,
        }
    }
}
