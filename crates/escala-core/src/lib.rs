//! # escala-core
//!
//! Shared error definitions and precondition macros for the escala-rs
//! workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error and `Result` definitions.
pub mod errors;

pub use errors::{Error, Result};
