//! Integration tests for monthly workload accounting and the duty-day
//! cycle properties.

use chrono::{Days, NaiveDate};
use escala_holidays::{Holiday, HolidayMap};
use escala_shifts::{RotationPattern, RotationTable, ShiftScheduler};
use proptest::prelude::*;
use std::collections::HashMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scheduler() -> ShiftScheduler {
    ShiftScheduler::new(RotationTable::builtin())
}

// December 2025 starts on a Monday: weekends are 6/7, 13/14, 20/21, 27/28,
// leaving 23 weekdays.

#[test]
fn december_2025_with_no_holidays() {
    let summary = scheduler()
        .calculate_workload(2025, 12, &HolidayMap::new(), "12x36-1")
        .unwrap();

    // Anchor on the 2nd, cycle 2: duty on 2, 4, …, 30.
    assert_eq!(summary.duty_days, 15);
    assert_eq!(summary.real_hours, 180);
    assert_eq!(summary.target_hours, 23 * 8);
    assert_eq!(summary.balance, 180 - 184);
}

#[test]
fn deductible_weekday_holiday_lowers_the_target() {
    let mut holidays = HolidayMap::new();
    // Christmas 2025 falls on a Thursday.
    holidays.insert(date(2025, 12, 25), Holiday::deductible("Natal"));

    let summary = scheduler()
        .calculate_workload(2025, 12, &holidays, "12x36-1")
        .unwrap();
    assert_eq!(summary.target_hours, 22 * 8);
    assert_eq!(summary.balance, 180 - 176);
}

#[test]
fn facultative_weekday_holiday_keeps_the_target() {
    let mut holidays = HolidayMap::new();
    // A facultative point on a Friday still counts toward the target.
    holidays.insert(date(2025, 12, 19), Holiday::facultative("Ponto Facultativo (PF)"));

    let summary = scheduler()
        .calculate_workload(2025, 12, &holidays, "12x36-1")
        .unwrap();
    assert_eq!(summary.target_hours, 23 * 8);
}

#[test]
fn weekend_holiday_changes_nothing() {
    let mut holidays = HolidayMap::new();
    // December 13 2025 is a Saturday: already out of the target.
    holidays.insert(date(2025, 12, 13), Holiday::deductible("Feriado no sábado"));

    let with_holiday = scheduler()
        .calculate_workload(2025, 12, &holidays, "12x36-1")
        .unwrap();
    let without = scheduler()
        .calculate_workload(2025, 12, &HolidayMap::new(), "12x36-1")
        .unwrap();
    assert_eq!(with_holiday, without);
}

#[test]
fn twelve_by_sixty_rotation_accounting() {
    // 12x60-1: cycle 3, anchor 2025-12-01, 12h duty, 6h/business-day target.
    let summary = scheduler()
        .calculate_workload(2025, 12, &HolidayMap::new(), "12x60-1")
        .unwrap();

    // Duty on 1, 4, 7, …, 31: eleven duty days.
    assert_eq!(summary.duty_days, 11);
    assert_eq!(summary.real_hours, 132);
    assert_eq!(summary.target_hours, 23 * 6);
    assert_eq!(summary.balance, 132 - 138);
}

#[test]
fn month_before_the_anchor_has_no_duty_days() {
    let summary = scheduler()
        .calculate_workload(2025, 11, &HolidayMap::new(), "12x36-1")
        .unwrap();
    assert_eq!(summary.duty_days, 0);
    assert_eq!(summary.real_hours, 0);
    assert!(summary.balance < 0);
}

proptest! {
    #[test]
    fn duty_membership_is_the_cycle_residue(
        cycle_days in 1u32..=14,
        offset in 0u64..=1500,
    ) {
        let anchor = date(2025, 12, 1);
        let pattern = RotationPattern::new(cycle_days, anchor, 12, 8).unwrap();
        let day = anchor + Days::new(offset);
        prop_assert_eq!(
            pattern.is_duty_day(day),
            offset % u64::from(cycle_days) == 0
        );
    }

    #[test]
    fn duty_days_recur_with_the_cycle_period(
        cycle_days in 1u32..=14,
        offset in 0u64..=1500,
    ) {
        let anchor = date(2025, 12, 1);
        let pattern = RotationPattern::new(cycle_days, anchor, 12, 8).unwrap();
        let day = anchor + Days::new(offset);
        let next_cycle = day + Days::new(u64::from(cycle_days));
        prop_assert_eq!(pattern.is_duty_day(day), pattern.is_duty_day(next_cycle));
    }

    #[test]
    fn pre_anchor_dates_are_never_duty_days(
        cycle_days in 1u32..=14,
        offset in 1u64..=1500,
    ) {
        let anchor = date(2025, 12, 1);
        let pattern = RotationPattern::new(cycle_days, anchor, 12, 8).unwrap();
        prop_assert!(!pattern.is_duty_day(anchor - Days::new(offset)));
    }
}

#[test]
fn scheduler_over_a_custom_table() {
    let table = RotationTable::new(HashMap::from([(
        "custom".to_string(),
        RotationPattern::new(4, date(2025, 6, 2), 24, 8).unwrap(),
    )]))
    .unwrap();
    let sched = ShiftScheduler::new(table);

    // June 2025: anchor Monday the 2nd, cycle 4 → 2, 6, 10, …, 30.
    assert_eq!(sched.duty_days_in_month(2025, 6, "custom").len(), 8);
    let summary = sched
        .calculate_workload(2025, 6, &HolidayMap::new(), "custom")
        .unwrap();
    assert_eq!(summary.duty_days, 8);
    assert_eq!(summary.real_hours, 8 * 24);
}
