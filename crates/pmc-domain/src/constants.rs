//! Domain layer constants
//!
//! Infrastructure-specific constants live in `pmc_infrastructure::constants`.

// ============================================================================
// SOURCE RECOGNITION CONSTANTS
// ============================================================================

/// File extension (without the dot) of the recognized source language
pub const RUBY_SOURCE_EXTENSION: &str = "rb";

/// Separator used to qualify nested class and module names
pub const SCOPE_SEPARATOR: &str = "::";

// ============================================================================
// REPORTING CONSTANTS
// ============================================================================

/// Separator used when listing method names in a single message
pub const METHOD_LIST_SEPARATOR: &str = ", ";
