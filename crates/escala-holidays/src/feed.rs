//! External holiday feed.
//!
//! The feed is best-effort: one attempt per uncached year, no retries, and
//! any failure degrades to locally computed holidays only.  The trait seam
//! exists so the calculator can be exercised without network access.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use escala_core::{Error, Result};
use serde::Deserialize;

/// One record of the external feed: a fixed national holiday.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedHoliday {
    /// Holiday date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Display name as published by the feed.
    pub name: String,
}

/// A source of fixed national holidays for a given year.
#[async_trait]
pub trait HolidayFeed: Send + Sync {
    /// Fetch the fixed holidays of `year`.
    ///
    /// A non-success status is an `Err`, not an empty list, so the caller
    /// can distinguish "no holidays" from "feed unavailable" when logging.
    async fn fetch(&self, year: i32) -> Result<Vec<FeedHoliday>>;
}

/// BrasilAPI national-holiday feed (`GET /api/feriados/v1/{year}`).
#[derive(Debug, Clone)]
pub struct BrasilApiFeed {
    client: reqwest::Client,
    base_url: String,
}

impl BrasilApiFeed {
    /// Public BrasilAPI endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://brasilapi.com.br";

    /// Request timeout. The feed is optional data; give up early.
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a feed client against the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL)
    }

    /// Create a feed client against a custom endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for BrasilApiFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HolidayFeed for BrasilApiFeed {
    async fn fetch(&self, year: i32) -> Result<Vec<FeedHoliday>> {
        let url = format!("{}/api/feriados/v1/{year}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Feed(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed(format!("{url} returned HTTP {status}")));
        }

        response
            .json::<Vec<FeedHoliday>>()
            .await
            .map_err(|e| Error::Feed(format!("malformed feed payload from {url}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_record_parses_iso_dates() {
        let record: FeedHoliday =
            serde_json::from_str(r#"{"date": "2025-12-25", "name": "Natal"}"#).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
        assert_eq!(record.name, "Natal");
    }

    #[test]
    fn feed_payload_parses_as_sequence() {
        let records: Vec<FeedHoliday> = serde_json::from_str(
            r#"[
                {"date": "2025-01-01", "name": "Confraternização mundial", "type": "national"},
                {"date": "2025-04-21", "name": "Tiradentes", "type": "national"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
    }
}
