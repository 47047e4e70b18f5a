//! Meal Planner Library
//!
//! Nutrition aggregation for products, recipes, daily food logs and week
//! menus, plus the chart data derived from them.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod records;
pub mod tools;
