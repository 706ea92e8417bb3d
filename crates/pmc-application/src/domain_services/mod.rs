//! Domain services
//!
//! Stateless operations on snapshots: building them from files and
//! comparing them.

pub mod diff_engine;
pub mod snapshot_builder;

pub use diff_engine::DiffEngine;
pub use snapshot_builder::{SnapshotBuild, SnapshotBuilder};
