//! `HolidayCalculator` — builds and caches the per-year holiday map.
//!
//! Merge precedence within one year:
//! 1. feed entries (Carnival entries discarded; computed locally instead),
//! 2. movable holidays, overwriting the feed on collision,
//! 3. municipal holidays, filling gaps only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::feed::HolidayFeed;
use crate::holiday::{Holiday, HolidayMap};
use crate::movable::movable_holidays;
use crate::municipal::{self, MunicipalHoliday};

/// Facultative-point marker used by upstream display names.
///
/// The flag is derived from it once, here at ingestion; nothing downstream
/// string-matches holiday names.
const FACULTATIVE_MARKER: &str = "(PF)";

/// Computes the holiday map of a year and caches it for the lifetime of
/// the calculator.
///
/// `holidays_for` never fails: an unreachable feed is a degraded-data
/// condition, logged and absorbed, leaving the movable and municipal
/// portions intact.
pub struct HolidayCalculator {
    feed: Box<dyn HolidayFeed>,
    municipal: Vec<MunicipalHoliday>,
    cache: Mutex<HashMap<i32, Arc<HolidayMap>>>,
}

impl HolidayCalculator {
    /// Create a calculator with the built-in municipal holidays.
    pub fn new(feed: Box<dyn HolidayFeed>) -> Self {
        Self::with_municipal(feed, municipal::builtin())
    }

    /// Create a calculator with an explicit municipal-holiday table.
    pub fn with_municipal(feed: Box<dyn HolidayFeed>, municipal: Vec<MunicipalHoliday>) -> Self {
        Self {
            feed,
            municipal,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Return the holiday map of `year`, computing and caching it on first
    /// use.
    ///
    /// Repeated calls for the same year return the cached map without
    /// touching the feed.  Concurrent first calls for the same year may
    /// fetch twice; the cache keeps whichever result lands last.
    pub async fn holidays_for(&self, year: i32) -> Arc<HolidayMap> {
        if let Some(cached) = self.lookup(year) {
            tracing::debug!(year, "holiday cache hit");
            return cached;
        }

        let map = Arc::new(self.build_year(year).await);
        self.cache
            .lock()
            .expect("holiday cache poisoned")
            .insert(year, Arc::clone(&map));
        map
    }

    /// Drop the cached map of `year`, forcing a rebuild on next use.
    pub fn invalidate(&self, year: i32) {
        self.cache
            .lock()
            .expect("holiday cache poisoned")
            .remove(&year);
    }

    fn lookup(&self, year: i32) -> Option<Arc<HolidayMap>> {
        self.cache
            .lock()
            .expect("holiday cache poisoned")
            .get(&year)
            .cloned()
    }

    async fn build_year(&self, year: i32) -> HolidayMap {
        let mut map = HolidayMap::new();

        match self.feed.fetch(year).await {
            Ok(entries) => {
                for entry in entries {
                    // The feed's Carnival entries are dropped: Carnival is
                    // computed locally and labelled facultative.
                    if entry.name.to_lowercase().contains("carnaval") {
                        continue;
                    }
                    let deductible = !entry.name.contains(FACULTATIVE_MARKER);
                    map.insert(
                        entry.date,
                        Holiday {
                            name: entry.name,
                            deductible,
                        },
                    );
                }
            }
            Err(error) => {
                tracing::warn!(
                    year,
                    %error,
                    "holiday feed unavailable, using locally computed holidays only"
                );
            }
        }

        for (date, holiday) in movable_holidays(year) {
            map.insert(date, holiday);
        }

        for entry in &self.municipal {
            if let Some(date) = entry.resolve_in(year) {
                map.entry(date).or_insert_with(|| entry.holiday());
            }
        }

        tracing::debug!(year, holidays = map.len(), "holiday map built");
        map
    }
}

impl std::fmt::Debug for HolidayCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached_years: Vec<i32> = self
            .cache
            .lock()
            .expect("holiday cache poisoned")
            .keys()
            .copied()
            .collect();
        f.debug_struct("HolidayCalculator")
            .field("municipal", &self.municipal.len())
            .field("cached_years", &cached_years)
            .finish_non_exhaustive()
    }
}
