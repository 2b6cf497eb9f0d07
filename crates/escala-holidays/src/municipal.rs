//! Fixed municipal holidays.
//!
//! Municipal holidays recur on the same day/month every year, so they are
//! configured day/month-keyed rather than per year.  They merge into the
//! year map with the lowest precedence: a feed or movable holiday on the
//! same date keeps its entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::holiday::Holiday;

/// A municipal holiday recurring every year on `day`/`month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalHoliday {
    /// Day of the month (1–31).
    pub day: u32,
    /// Month (1–12).
    pub month: u32,
    /// Display name.
    pub name: String,
    /// Whether the holiday removes a weekday from the business-day count.
    pub deductible: bool,
}

impl MunicipalHoliday {
    /// Resolve this entry to a concrete date in `year`.
    ///
    /// Returns `None` for day/month combinations that do not exist in the
    /// given year (a misconfigured Feb 30, say); such entries are skipped
    /// rather than rejected.
    pub fn resolve_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// The holiday record this entry contributes to a year map.
    pub fn holiday(&self) -> Holiday {
        Holiday {
            name: self.name.clone(),
            deductible: self.deductible,
        }
    }
}

/// The municipal holidays of the original deployment (Cascavel-PR).
pub fn builtin() -> Vec<MunicipalHoliday> {
    vec![
        MunicipalHoliday {
            day: 14,
            month: 11,
            name: "Aniv. Cascavel".into(),
            deductible: true,
        },
        MunicipalHoliday {
            day: 28,
            month: 10,
            name: "Dia do Servidor (PF)".into(),
            deductible: false,
        },
    ]
}
