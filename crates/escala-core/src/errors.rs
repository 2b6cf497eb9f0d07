//! Error types for escala-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace.  Most of
//! the core is deliberately infallible: feed unavailability degrades to
//! locally computed data and unknown rotation identifiers yield benign
//! absent values, so the variants here surface only malformed
//! configuration and the feed transport failures that are reported
//! internally before they are absorbed.

use thiserror::Error;

/// The top-level error type used throughout escala-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid static configuration (rotation table, municipal holidays).
    #[error("configuration error: {0}")]
    Config(String),

    /// Holiday feed transport or status failure.  Never propagated past
    /// the holiday calculator; callers of `holidays_for` see degraded
    /// data instead.
    #[error("holiday feed error: {0}")]
    Feed(String),
}

/// Shorthand `Result` type used throughout escala-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Config(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use escala_core::ensure;
/// fn cycle(days: u32) -> escala_core::Result<u32> {
///     ensure!(days >= 1, "cycle length must be at least 1 day, got {days}");
///     Ok(days)
/// }
/// assert!(cycle(2).is_ok());
/// assert!(cycle(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Config(
                format!($($msg)*)
            ));
        }
    };
}
