//! Meal Planner
//!
//! An MCP server for recipe, food log and shopping list nutrition.

use mealplan::mcp::MealPlanService;
use mealplan::{build_info, config};
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mealplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let chart_config_path = config::chart_config_path();

    // Print startup banner to stderr
    build_info::print_startup_banner(chart_config_path.as_deref());
    eprintln!("Starting MCP server on stdio...");

    let chart_config = config::load_chart_config()?;

    let service = MealPlanService::new(chart_config, chart_config_path);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
