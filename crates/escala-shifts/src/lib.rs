//! # escala-shifts
//!
//! Duty-day projection for work rotations and monthly worked-vs-target
//! hour accounting.  A rotation is a fixed-length day cycle anchored at a
//! known duty day; the monthly target is derived from the business days of
//! the month net of deductible holidays.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rotation patterns and the configured rotation table.
pub mod rotation;

/// Duty-day classification and workload accounting.
pub mod scheduler;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use rotation::{RotationPattern, RotationTable};
pub use scheduler::{ShiftScheduler, WorkloadSummary};
