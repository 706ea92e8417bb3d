//! Check Report Generation
//!
//! Turns class diffs and file warnings into annotations and renders them:
//! - Human-readable text for terminal output
//! - JSON for tooling
//! - Workflow commands for GitHub Actions annotations

use pmc_domain::constants::METHOD_LIST_SEPARATOR;
use pmc_domain::{ClassDiff, FileWarning};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Annotation severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the review
    Error,
    /// Reported but does not block
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// One message attached to the review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Severity of the message
    pub severity: Severity,

    /// Class the message is about, for diff annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// File the message is about, for file warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Message text
    pub message: String,
}

impl Annotation {
    /// Failing annotation for removed public methods
    pub fn removed(class_name: &str, methods: &BTreeSet<String>) -> Self {
        Self {
            severity: Severity::Error,
            class_name: Some(class_name.to_string()),
            path: None,
            message: format!(
                "In class `{class_name}` public methods were removed: {}",
                join_methods(methods)
            ),
        }
    }

    /// Non-failing annotation for added public methods
    pub fn added(class_name: &str, methods: &BTreeSet<String>) -> Self {
        Self {
            severity: Severity::Warning,
            class_name: Some(class_name.to_string()),
            path: None,
            message: format!(
                "In class `{class_name}` public methods were added: {}",
                join_methods(methods)
            ),
        }
    }

    /// Non-failing annotation for a file left out of a snapshot
    pub fn file_warning(warning: &FileWarning) -> Self {
        Self {
            severity: Severity::Warning,
            class_name: None,
            path: Some(warning.path.clone()),
            message: warning.to_string(),
        }
    }
}

fn join_methods(methods: &BTreeSet<String>) -> String {
    methods
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(METHOD_LIST_SEPARATOR)
}

/// Summary of a check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Number of classes in the base snapshot
    pub classes_compared: usize,
    /// Number of classes with removed or added methods
    pub changed_classes: usize,
    /// Total number of removed public methods
    pub removed_methods: usize,
    /// Total number of added public methods
    pub added_methods: usize,
    /// Number of files left out of either snapshot
    pub file_warnings: usize,
    /// Whether the check passed (no error annotation)
    pub passed: bool,
}

/// Full result of comparing two revisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Base revision
    pub base: String,
    /// Head revision
    pub head: String,
    /// Summary statistics
    pub summary: CheckSummary,
    /// Per-class changes in base order
    pub diffs: Vec<ClassDiff>,
    /// Files left out of either snapshot
    pub warnings: Vec<FileWarning>,
    /// Messages derived from diffs and warnings
    pub annotations: Vec<Annotation>,
}

impl CheckReport {
    /// Assemble a report and derive its annotations and summary
    pub fn new(
        base: impl Into<String>,
        head: impl Into<String>,
        classes_compared: usize,
        diffs: Vec<ClassDiff>,
        warnings: Vec<FileWarning>,
    ) -> Self {
        let mut annotations = Vec::new();
        for diff in &diffs {
            if !diff.removed.is_empty() {
                annotations.push(Annotation::removed(&diff.class_name, &diff.removed));
            }
            if !diff.added.is_empty() {
                annotations.push(Annotation::added(&diff.class_name, &diff.added));
            }
        }
        annotations.extend(warnings.iter().map(Annotation::file_warning));

        let summary = CheckSummary {
            classes_compared,
            changed_classes: diffs.len(),
            removed_methods: diffs.iter().map(|d| d.removed.len()).sum(),
            added_methods: diffs.iter().map(|d| d.added.len()).sum(),
            file_warnings: warnings.len(),
            passed: !annotations.iter().any(|a| a.severity == Severity::Error),
        };

        Self {
            base: base.into(),
            head: head.into(),
            summary,
            diffs,
            warnings,
            annotations,
        }
    }

    /// True when no public method was removed
    pub fn passed(&self) -> bool {
        self.summary.passed
    }
}

/// Output format for a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Terminal text
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// GitHub Actions workflow commands
    Github,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Github => write!(f, "github"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "github" | "ci" => Ok(Self::Github),
            other => Err(format!(
                "Unknown report format: {other}. Use human, json or github"
            )),
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Render a report in the requested format
    pub fn render(report: &CheckReport, format: ReportFormat) -> String {
        match format {
            ReportFormat::Human => Self::to_human_readable(report),
            ReportFormat::Json => Self::to_json(report),
            ReportFormat::Github => Self::to_ci_summary(report),
        }
    }

    /// Generate JSON report
    pub fn to_json(report: &CheckReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &CheckReport) -> String {
        let mut output = String::new();
        let summary = &report.summary;

        output.push_str("=== Public Methods Check ===\n\n");
        output.push_str(&format!("Base: {}\n", report.base));
        output.push_str(&format!("Head: {}\n\n", report.head));

        output.push_str("--- Summary ---\n");
        output.push_str(&format!(
            "Classes compared: {}\n",
            summary.classes_compared
        ));
        output.push_str(&format!("Changed classes:  {}\n", summary.changed_classes));
        output.push_str(&format!("Removed methods:  {}\n", summary.removed_methods));
        output.push_str(&format!("Added methods:    {}\n", summary.added_methods));
        output.push_str(&format!("File warnings:    {}\n", summary.file_warnings));
        output.push('\n');

        if !report.annotations.is_empty() {
            output.push_str("--- Annotations ---\n");
            for annotation in &report.annotations {
                output.push_str(&format!(
                    "  [{}] {}\n",
                    annotation.severity, annotation.message
                ));
            }
            output.push('\n');
        }

        let warnings = Self::count_warnings(report);
        if summary.passed && warnings == 0 {
            output.push_str("Result: PASSED\n");
        } else if summary.passed {
            output.push_str(&format!("Result: PASSED ({warnings} warning(s))\n"));
        } else {
            output.push_str(&format!(
                "Result: FAILED ({} error(s), {warnings} warning(s))\n",
                Self::count_errors(report)
            ));
        }

        output
    }

    /// Generate GitHub Actions workflow commands
    ///
    /// One `::error` or `::warning` line per annotation. File warnings carry
    /// the `file=` property so they attach to the file in the diff view.
    pub fn to_ci_summary(report: &CheckReport) -> String {
        let mut output = String::new();

        for annotation in &report.annotations {
            let command = match annotation.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let properties = annotation
                .path
                .as_deref()
                .map(|path| format!("file={}", escape_property(path)))
                .unwrap_or_default();
            output.push_str(&format!(
                "::{command} {properties}::{}\n",
                escape_data(&annotation.message)
            ));
        }

        output
    }

    /// Count error-level annotations
    pub fn count_errors(report: &CheckReport) -> usize {
        Self::count_by_severity(report, Severity::Error)
    }

    /// Count warning-level annotations
    pub fn count_warnings(report: &CheckReport) -> usize {
        Self::count_by_severity(report, Severity::Warning)
    }

    fn count_by_severity(report: &CheckReport, severity: Severity) -> usize {
        report
            .annotations
            .iter()
            .filter(|a| a.severity == severity)
            .count()
    }
}

/// Escape a workflow command message
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
