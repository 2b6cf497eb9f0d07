//! `Holiday` record and the per-year `HolidayMap`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single public holiday.
///
/// The original portal encoded "ponto facultativo" (facultative point) as a
/// `"(PF)"` substring of the display name and string-matched on it when
/// computing monthly targets.  Here the signal is an explicit flag:
/// a *deductible* holiday removes its weekday from the business-day count,
/// a non-deductible (facultative) one does not.  Display names keep their
/// original text, suffix included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Display name, e.g. `"Paixão de Cristo"` or `"Carnaval (PF)"`.
    pub name: String,
    /// Whether the holiday removes a weekday from the business-day count.
    pub deductible: bool,
}

impl Holiday {
    /// A holiday that reduces the monthly target (the common case).
    pub fn deductible(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deductible: true,
        }
    }

    /// A facultative-point holiday: displayed as a holiday, but its weekday
    /// still counts toward the monthly target.
    pub fn facultative(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deductible: false,
        }
    }
}

/// All holidays of one calendar year, keyed by date.
///
/// Built by [`crate::HolidayCalculator`]; consumed read-only by the shift
/// scheduler, which never looks past this mapping.
pub type HolidayMap = BTreeMap<NaiveDate, Holiday>;
