//! # escala-holidays
//!
//! Per-year public-holiday maps for the portal calendar: fixed national
//! holidays from an external feed, movable holidays computed locally from
//! the date of Easter Sunday, and statically configured municipal
//! holidays, merged and cached per year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalculator` — merge, cache, and degraded-feed handling.
pub mod calculator;

/// Gregorian Easter computus.
pub mod easter;

/// External holiday feed trait and the BrasilAPI client.
pub mod feed;

/// `Holiday` record and `HolidayMap` alias.
pub mod holiday;

/// Movable holidays derived from Easter Sunday.
pub mod movable;

/// Fixed municipal holidays keyed by day/month.
pub mod municipal;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::HolidayCalculator;
pub use easter::easter_sunday;
pub use feed::{BrasilApiFeed, FeedHoliday, HolidayFeed};
pub use holiday::{Holiday, HolidayMap};
pub use movable::movable_holidays;
pub use municipal::MunicipalHoliday;
