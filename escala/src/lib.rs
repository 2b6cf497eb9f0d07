//! # escala
//!
//! Shift-schedule and holiday-workload calculations for an institutional
//! portal calendar.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `escala-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use escala::shifts::{RotationTable, ShiftScheduler};
//!
//! let scheduler = ShiftScheduler::new(RotationTable::builtin());
//! let anchor = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();
//! assert!(scheduler.is_duty_day(anchor, "12x36-1"));
//! assert!(!scheduler.is_duty_day(anchor, "no-such-rotation"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error definitions.
pub use escala_core as core;

/// Holiday computation, feed client, and per-year cache.
pub use escala_holidays as holidays;

/// Rotation configuration, duty-day projection, workload accounting.
pub use escala_shifts as shifts;
