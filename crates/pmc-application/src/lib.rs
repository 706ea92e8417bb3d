//! Application Layer - PMC
//!
//! Use cases and services that turn two revisions of a codebase into a
//! report of public API changes.
//!
//! ## Architecture
//!
//! The application layer:
//! - Builds snapshots from source files with an injected [`SymbolExtractor`]
//! - Diffs two snapshots class by class
//! - Renders check reports for terminals, CI annotations and JSON consumers
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `pmc-domain`: entities, value objects and port traits
//! - Pure Rust libraries for parallelism, globbing and serialization
//!
//! [`SymbolExtractor`]: pmc_domain::SymbolExtractor

pub mod domain_services;
pub mod report;
pub mod use_cases;

pub use domain_services::*;
pub use report::{Annotation, CheckReport, CheckSummary, ReportFormat, Reporter, Severity};
pub use use_cases::*;
