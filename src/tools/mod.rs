//! Meal planner tools module
//!
//! MCP tool implementations over the nutrition engine.

pub mod nutrition;
pub mod status;
