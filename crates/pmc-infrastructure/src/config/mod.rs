//! Configuration management
//!
//! Layered configuration with Figment: built-in defaults, then a TOML file,
//! then `PMC__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
