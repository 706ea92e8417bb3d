//! Use cases

pub mod check;

pub use check::PublicMethodsCheck;
