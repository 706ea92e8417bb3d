//! Command line interface
//!
//! Flags override values loaded from configuration. Ignore-list flags are
//! appended to the configured lists.

use clap::Parser;
use pmc_application::ReportFormat;
use pmc_domain::FileScope;
use pmc_infrastructure::config::{AppConfig, ConfigLoader, SourceKind};
use std::path::PathBuf;

/// Command line interface for PMC
#[derive(Parser, Debug, Default)]
#[command(name = "pmc")]
#[command(about = "PMC - Report public methods removed or added between two revisions")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to ./pmc.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository to inspect
    #[arg(long, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Base revision (branch, tag, SHA or rev-spec)
    #[arg(long, value_name = "REV")]
    pub base: Option<String>,

    /// Head revision (branch, tag, SHA or rev-spec)
    #[arg(long, value_name = "REV")]
    pub head: Option<String>,

    /// Only compare files touched between base and head
    #[arg(long)]
    pub changed_only: bool,

    /// Compare two directories instead of two commits: base checkout
    #[arg(long, value_name = "DIR", requires = "head_dir", conflicts_with_all = ["base", "repo"])]
    pub base_dir: Option<PathBuf>,

    /// Compare two directories instead of two commits: head checkout
    #[arg(long, value_name = "DIR", requires = "base_dir", conflicts_with_all = ["head", "repo"])]
    pub head_dir: Option<PathBuf>,

    /// Report format: human, json or github
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Size of the extraction worker pool
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// File path or glob to leave out (repeatable)
    #[arg(long = "ignore-file", value_name = "PATH")]
    pub ignore_files: Vec<String>,

    /// Fully qualified class name to leave out (repeatable)
    #[arg(long = "ignore-class", value_name = "CLASS")]
    pub ignore_classes: Vec<String>,

    /// Method name to leave out (repeatable)
    #[arg(long = "ignore-method", value_name = "METHOD")]
    pub ignore_methods: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Configuration loader honoring `--config`
    pub fn config_loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }

    /// Apply command line overrides to a loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        let check = &mut config.check;

        if let Some(repo) = &self.repo {
            check.repository = repo.clone();
        }
        if let Some(base) = &self.base {
            check.base = base.clone();
        }
        if let Some(head) = &self.head {
            check.head = head.clone();
        }
        if let (Some(base_dir), Some(head_dir)) = (&self.base_dir, &self.head_dir) {
            check.source = SourceKind::Directory;
            check.base = base_dir.to_string_lossy().into_owned();
            check.head = head_dir.to_string_lossy().into_owned();
        }
        if self.changed_only {
            check.scope = FileScope::Changed;
        }
        if let Some(format) = self.format {
            check.format = format;
        }
        if self.workers.is_some() {
            check.workers = self.workers;
        }

        let exclusions = &mut config.exclusions;
        exclusions.ignore_files.extend(self.ignore_files.iter().cloned());
        exclusions.ignore_classes.extend(self.ignore_classes.iter().cloned());
        exclusions.ignore_methods.extend(self.ignore_methods.iter().cloned());

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
