//! Configuration types module

pub mod app;
pub mod check;
pub mod exclusions;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use check::{CheckConfig, SourceKind};
pub use exclusions::ExclusionsConfig;
pub use logging::LoggingConfig;
