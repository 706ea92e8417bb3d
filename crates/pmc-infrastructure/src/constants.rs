//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `pmc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "pmc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "pmc";

/// Environment variable prefix for configuration
///
/// Variables are read as `PMC__SECTION__KEY`.
pub const CONFIG_ENV_PREFIX: &str = "PMC";

/// Separator between the prefix and nested keys of environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CHECK CONSTANTS
// ============================================================================

/// Default base revision
pub const DEFAULT_BASE_REVISION: &str = "HEAD~1";

/// Default head revision
pub const DEFAULT_HEAD_REVISION: &str = "HEAD";

/// Default repository location
pub const DEFAULT_REPOSITORY_PATH: &str = ".";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a tracing filter that overrides the level
pub const LOG_FILTER_ENV: &str = "PMC_LOG";
