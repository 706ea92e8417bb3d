//! # PMC - Public Methods Changes
//!
//! A code-review gate that compares the public surface of a codebase's
//! classes between a base and a head revision.
//!
//! Removed public methods are breaking changes and fail the check. Added
//! public methods are reported as warnings. Source files are parsed, never
//! executed.
//!
//! ## Example
//!
//! ```ignore
//! use pmc::application::{PublicMethodsCheck, Reporter, SnapshotBuilder};
//! use pmc::providers::{GitRevisionSource, RubySymbolExtractor};
//! use std::sync::Arc;
//!
//! let builder = SnapshotBuilder::new(Arc::new(RubySymbolExtractor::new()), Default::default())?;
//! let check = PublicMethodsCheck::new(Arc::new(GitRevisionSource::open(".")?), builder);
//! let report = check.run("origin/main", "HEAD")?;
//! print!("{}", Reporter::to_human_readable(&report));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, ports and errors
//! - `application` - Snapshot builder, diff engine, reporter and check use case
//! - `providers` - Ruby extractor and revision sources
//! - `infrastructure` - Configuration, logging and wiring

pub mod cli;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use pmc_domain::*;
}

/// Application layer - snapshot building, diffing and reporting
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use pmc_application::*;
}

/// Providers - symbol extractors and revision sources
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use pmc_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use pmc_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the main entry points at the crate root
pub use application::{CheckReport, PublicMethodsCheck, Reporter};
pub use infrastructure::{AppContext, init_app};
