//! Build metadata embedded by `build.rs`

use std::path::Path;

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

const RAW_BUILD_NUMBER: Option<&str> = option_env!("MEALPLAN_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("MEALPLAN_BUILD_TIMESTAMP");

/// Version and build stamp reported by the status tool and the banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// 0 when the build script did not run
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self::from_raw(RAW_BUILD_NUMBER, RAW_BUILD_TIMESTAMP)
    }

    fn from_raw(build_number: Option<&str>, build_timestamp: Option<&'static str>) -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: build_number
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(0),
            build_timestamp: build_timestamp.unwrap_or("unknown"),
        }
    }

    /// Startup banner lines, naming where the chart tables come from
    pub fn banner_lines(&self, chart_config: Option<&Path>) -> Vec<String> {
        let charts = match chart_config {
            Some(path) => format!("Charts: {}", path.display()),
            None => "Charts: built-in meal table".to_string(),
        };
        vec![
            "===============================================".to_string(),
            "  Meal Planner Nutrition Server".to_string(),
            format!("  {} {} | Build: {}", self.name, self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
            format!("  {}", charts),
            "===============================================".to_string(),
        ]
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner(chart_config: Option<&Path>) {
    for line in BuildInfo::current().banner_lines(chart_config) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_number_parsing() {
        assert_eq!(BuildInfo::from_raw(Some("42"), None).build_number, 42);
        assert_eq!(BuildInfo::from_raw(Some("4a"), None).build_number, 0);
        assert_eq!(BuildInfo::from_raw(None, None).build_number, 0);
        assert_eq!(BuildInfo::from_raw(None, None).build_timestamp, "unknown");
    }

    #[test]
    fn test_banner_names_chart_source() {
        let info = BuildInfo::from_raw(Some("7"), Some("2026-10-18T12:00:00Z"));
        assert_eq!(info.name, "mealplan");

        let lines = info.banner_lines(Some(Path::new("/etc/mealplan/charts.json")));
        assert!(lines[2].ends_with("| Build: 7"));
        assert_eq!(lines[4], "  Charts: /etc/mealplan/charts.json");

        let lines = info.banner_lines(None);
        assert_eq!(lines[4], "  Charts: built-in meal table");
    }
}
