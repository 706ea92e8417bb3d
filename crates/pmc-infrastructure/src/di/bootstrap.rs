//! Bootstrap - Providers + Check Use Case
//!
//! ```text
//! AppConfig → RevisionSource (git | directory) ─┐
//!           → SymbolExtractor (ruby)  → SnapshotBuilder → PublicMethodsCheck
//!           → Exclusions ───────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let report = context.run_check()?;
//! print!("{}", Reporter::render(&report, context.config.check.format));
//! ```

use crate::config::{AppConfig, SourceKind};
use crate::utils::TimedOperation;
use pmc_application::{CheckReport, PublicMethodsCheck, SnapshotBuilder};
use pmc_domain::error::Result;
use pmc_domain::{RevisionSource, SymbolExtractor};
use pmc_providers::{DirectoryRevisionSource, GitRevisionSource, RubySymbolExtractor};
use std::sync::Arc;
use tracing::info;

/// Application context holding the configured providers
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    source: Arc<dyn RevisionSource>,
    extractor: Arc<dyn SymbolExtractor>,
}

impl AppContext {
    /// Revision source selected by configuration
    pub fn source(&self) -> Arc<dyn RevisionSource> {
        Arc::clone(&self.source)
    }

    /// Symbol extractor for the recognized language
    pub fn extractor(&self) -> Arc<dyn SymbolExtractor> {
        Arc::clone(&self.extractor)
    }

    /// Build the check use case
    ///
    /// Fails when an ignored-files pattern is invalid or the worker pool
    /// cannot be created.
    pub fn public_methods_check(&self) -> Result<PublicMethodsCheck> {
        let check = &self.config.check;
        let mut builder = SnapshotBuilder::new(
            self.extractor(),
            self.config.exclusions.to_exclusions(),
        )?;
        if let Some(workers) = check.workers {
            builder = builder.with_workers(workers)?;
        }

        Ok(PublicMethodsCheck::new(self.source(), builder).with_scope(check.scope))
    }

    /// Run the configured comparison
    pub fn run_check(&self) -> Result<CheckReport> {
        let timer = TimedOperation::start();
        let check = &self.config.check;
        let report = self.public_methods_check()?.run(&check.base, &check.head)?;

        info!(
            elapsed_ms = timer.elapsed_ms(),
            passed = report.passed(),
            "Comparison complete"
        );
        Ok(report)
    }
}

/// Create the application context from configuration
///
/// Opens the repository up front, so a missing or broken repository fails
/// before any file is read.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let source: Arc<dyn RevisionSource> = match config.check.source {
        SourceKind::Git => Arc::new(GitRevisionSource::open(&config.check.repository)?),
        SourceKind::Directory => {
            Arc::new(DirectoryRevisionSource::new().with_root(&config.check.repository))
        }
    };
    let extractor: Arc<dyn SymbolExtractor> = Arc::new(RubySymbolExtractor::new());

    info!(
        source = source.name(),
        language = extractor.language(),
        repository = %config.check.repository.display(),
        "Application context initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        source,
        extractor,
    })
}
