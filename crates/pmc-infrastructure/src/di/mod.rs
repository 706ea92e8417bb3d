//! Composition root
//!
//! Wires concrete providers into the application layer according to the
//! loaded configuration. This module contains only wiring logic.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
