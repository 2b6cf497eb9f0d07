//! Duty-day classification and monthly workload accounting.

use chrono::{Datelike, NaiveDate, Weekday};
use escala_holidays::HolidayMap;

use crate::rotation::RotationTable;

/// Worked-vs-target hours of one (year, month, rotation).
///
/// A derived value, recomputed on demand.  All hour figures are integers:
/// whole-day counts times whole-hour rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSummary {
    /// Number of duty days in the month.
    pub duty_days: u32,
    /// `duty_days × shift_hours`.
    pub real_hours: i64,
    /// `business_days × target_hours_per_business_day`.
    pub target_hours: i64,
    /// `real_hours − target_hours`; negative means a deficit.
    pub balance: i64,
}

/// Classifies calendar days against a configured rotation table.
///
/// Unknown rotation identifiers are a normal state ("no schedule
/// selected"), answered with `false` / `None` rather than an error.
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    table: RotationTable,
}

impl ShiftScheduler {
    /// Create a scheduler over the given rotation table.
    pub fn new(table: RotationTable) -> Self {
        Self { table }
    }

    /// The rotation table this scheduler answers from.
    pub fn table(&self) -> &RotationTable {
        &self.table
    }

    /// Return `true` if `date` is a duty day of the identified rotation.
    ///
    /// `false` for unknown identifiers and for all dates strictly before
    /// the rotation's anchor.
    pub fn is_duty_day(&self, date: NaiveDate, rotation_id: &str) -> bool {
        match self.table.get(rotation_id) {
            Some(pattern) => pattern.is_duty_day(date),
            None => false,
        }
    }

    /// The duty dates of a month, in calendar order.
    ///
    /// Empty for unknown identifiers (and for invalid months).
    pub fn duty_days_in_month(&self, year: i32, month: u32, rotation_id: &str) -> Vec<NaiveDate> {
        let Some(pattern) = self.table.get(rotation_id) else {
            return Vec::new();
        };
        month_days(year, month)
            .into_iter()
            .flatten()
            .filter(|day| pattern.is_duty_day(*day))
            .collect()
    }

    /// Compute the monthly workload summary of a rotation.
    ///
    /// Every calendar day of the month is classified twice: as a duty day
    /// (real hours) and as a business day (target hours).  A day is a
    /// business day unless it falls on a weekend or carries a *deductible*
    /// holiday; facultative holidays keep their weekday in the target.
    ///
    /// `None` for unknown rotation identifiers and invalid months.
    pub fn calculate_workload(
        &self,
        year: i32,
        month: u32,
        holidays: &HolidayMap,
        rotation_id: &str,
    ) -> Option<WorkloadSummary> {
        let pattern = self.table.get(rotation_id)?;
        let days = month_days(year, month)?;

        let mut duty_days: u32 = 0;
        let mut business_days: i64 = 0;

        for day in days {
            if pattern.is_duty_day(day) {
                duty_days += 1;
            }

            let is_weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
            let is_deductible_holiday = holidays.get(&day).is_some_and(|h| h.deductible);
            if !is_weekend && !is_deductible_holiday {
                business_days += 1;
            }
        }

        let real_hours = i64::from(duty_days) * pattern.shift_hours;
        let target_hours = business_days * pattern.target_hours_per_business_day;
        Some(WorkloadSummary {
            duty_days,
            real_hours,
            target_hours,
            balance: real_hours - target_hours,
        })
    }
}

/// Iterate the calendar days of a month; `None` for invalid months.
fn month_days(year: i32, month: u32) -> Option<impl Iterator<Item = NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(first.iter_days().take_while(move |d| d.month() == month && d.year() == year))
}
