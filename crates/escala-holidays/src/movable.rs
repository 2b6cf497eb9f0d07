//! Movable holidays derived from Easter Sunday.
//!
//! Four dates, all fixed offsets from the computus result:
//! * Carnival Monday (Easter − 48), facultative
//! * Carnival Tuesday (Easter − 47), facultative
//! * Good Friday (Easter − 2)
//! * Corpus Christi (Easter + 60)

use chrono::{Days, NaiveDate};

use crate::easter::easter_sunday;
use crate::holiday::Holiday;

/// Return the four movable holidays of `year`, in calendar order.
///
/// Carnival is computed locally (and labelled facultative) rather than
/// taken from the external feed, which lists it as an ordinary holiday.
pub fn movable_holidays(year: i32) -> [(NaiveDate, Holiday); 4] {
    let easter = easter_sunday(year);
    let back = |days| {
        easter
            .checked_sub_days(Days::new(days))
            .expect("offset from Easter stays in range")
    };
    let forward = |days| {
        easter
            .checked_add_days(Days::new(days))
            .expect("offset from Easter stays in range")
    };

    [
        (back(48), Holiday::facultative("Carnaval (PF)")),
        (back(47), Holiday::facultative("Carnaval (PF)")),
        (back(2), Holiday::deductible("Paixão de Cristo")),
        (forward(60), Holiday::deductible("Corpus Christi")),
    ]
}
