//! Rotation patterns and the configured rotation table.
//!
//! A rotation is statically configured: it never changes at run time, and
//! the table is loaded once at startup (from any serde source, or the
//! built-in deployment defaults).

use std::collections::HashMap;

use chrono::NaiveDate;
use escala_core::{ensure, Result};
use serde::{Deserialize, Serialize};

/// One work rotation: a duty day recurring every `cycle_days`, projected
/// forward from a known anchor duty day.
///
/// Dates are whole calendar days; time of day is never significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPattern {
    /// Duty day recurs every this many days.  At least 1.
    pub cycle_days: u32,
    /// A date known to be a duty day; the modular reference point.
    pub anchor: NaiveDate,
    /// Hours credited per duty day.
    pub shift_hours: i64,
    /// Hours a business day contributes to the monthly target.
    pub target_hours_per_business_day: i64,
}

impl RotationPattern {
    /// Create a validated rotation pattern.
    pub fn new(
        cycle_days: u32,
        anchor: NaiveDate,
        shift_hours: i64,
        target_hours_per_business_day: i64,
    ) -> Result<Self> {
        let pattern = Self {
            cycle_days,
            anchor,
            shift_hours,
            target_hours_per_business_day,
        };
        pattern.validate()?;
        Ok(pattern)
    }

    /// Check the pattern invariants.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cycle_days >= 1,
            "cycle length must be at least 1 day, got {}",
            self.cycle_days
        );
        ensure!(
            self.shift_hours > 0,
            "shift hours must be positive, got {}",
            self.shift_hours
        );
        ensure!(
            self.target_hours_per_business_day > 0,
            "target hours per business day must be positive, got {}",
            self.target_hours_per_business_day
        );
        Ok(())
    }

    /// Return `true` if `date` is a duty day of this rotation.
    ///
    /// Dates strictly before the anchor are never duty days.  This is the
    /// observed upstream contract, kept as-is rather than generalised to a
    /// symmetric modulo.
    pub fn is_duty_day(&self, date: NaiveDate) -> bool {
        let diff_days = date.signed_duration_since(self.anchor).num_days();
        diff_days >= 0 && diff_days % i64::from(self.cycle_days) == 0
    }
}

/// The configured rotations, keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RotationTable {
    rotations: HashMap<String, RotationPattern>,
}

impl RotationTable {
    /// Build a table from explicit entries, validating every pattern.
    pub fn new(rotations: HashMap<String, RotationPattern>) -> Result<Self> {
        for pattern in rotations.values() {
            pattern.validate()?;
        }
        Ok(Self { rotations })
    }

    /// The rotation table of the original deployment: two 12x36 teams
    /// (2-day cycle, 8h/business-day target) and three 12x60 teams (3-day
    /// cycle, 6h/business-day target), all working 12-hour duty days.
    pub fn builtin() -> Self {
        let anchor = |d| {
            NaiveDate::from_ymd_opt(2025, 12, d).expect("December 2025 anchor dates are valid")
        };
        let pattern = |cycle_days, anchor, target| RotationPattern {
            cycle_days,
            anchor,
            shift_hours: 12,
            target_hours_per_business_day: target,
        };
        let rotations = HashMap::from([
            ("12x36-1".to_string(), pattern(2, anchor(2), 8)),
            ("12x36-2".to_string(), pattern(2, anchor(1), 8)),
            ("12x60-1".to_string(), pattern(3, anchor(1), 6)),
            ("12x60-2".to_string(), pattern(3, anchor(2), 6)),
            ("12x60-3".to_string(), pattern(3, anchor(3), 6)),
        ]);
        Self { rotations }
    }

    /// Look up a rotation by identifier.
    pub fn get(&self, rotation_id: &str) -> Option<&RotationPattern> {
        self.rotations.get(rotation_id)
    }

    /// Iterate over the configured rotation identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rotations.keys().map(String::as_str)
    }

    /// Number of configured rotations.
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// Return `true` if no rotation is configured.
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }
}
