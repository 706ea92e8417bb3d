//! Which files of a revision take part in a comparison

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File selection strategy for building snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileScope {
    /// Every file tracked at the revision
    #[default]
    Tracked,
    /// Only files touched between base and head
    Changed,
}

impl fmt::Display for FileScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracked => write!(f, "tracked"),
            Self::Changed => write!(f, "changed"),
        }
    }
}

impl FromStr for FileScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tracked" | "all" => Ok(Self::Tracked),
            "changed" => Ok(Self::Changed),
            other => Err(format!("Unknown file scope: {other}. Use tracked or changed")),
        }
    }
}
