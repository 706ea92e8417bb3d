//! Value objects
//!
//! Immutable values derived from or configuring a comparison.

pub mod class_diff;
pub mod exclusions;
pub mod file_scope;
pub mod file_warning;

pub use class_diff::ClassDiff;
pub use exclusions::Exclusions;
pub use file_scope::FileScope;
pub use file_warning::{FileWarning, FileWarningKind};
