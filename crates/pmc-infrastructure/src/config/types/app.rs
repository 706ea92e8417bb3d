//! Main application configuration

use super::{CheckConfig, ExclusionsConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// ```toml
/// [check]
/// base = "origin/main"
/// head = "HEAD"
/// scope = "changed"
/// format = "github"
///
/// [exclusions]
/// ignore_files = ["lib/generated/**/*.rb"]
/// ignore_classes = ["Legacy::Adapter"]
/// ignore_methods = ["to_s", "inspect"]
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// What to compare and how to report it
    #[serde(default)]
    pub check: CheckConfig,

    /// Files, classes and methods left out of every snapshot
    #[serde(default)]
    pub exclusions: ExclusionsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
