use crate::provider::error::ProviderError;
use crate::provider::weather_provider::WeatherProvider;
use crate::types::weather_record::WeatherRecord;
use chrono::NaiveDate;
use log::{error, warn};

/// Number of provider attempts made for a single day unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Result of [`fetch_with_retry`]. Provider failures end up here instead of propagating.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The provider answered on attempt number `attempts`.
    Fetched { record: WeatherRecord, attempts: u32 },
    /// Every attempt failed. `last_error` is `None` only when zero attempts were allowed.
    Exhausted {
        attempts: u32,
        last_error: Option<ProviderError>,
    },
}

impl FetchOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            FetchOutcome::Fetched { attempts, .. } | FetchOutcome::Exhausted { attempts, .. } => {
                *attempts
            }
        }
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            FetchOutcome::Fetched { record, .. } => Some(record),
            FetchOutcome::Exhausted { .. } => None,
        }
    }
}

/// Asks `provider` for the record of `city` on `date`, up to `max_attempts` times.
///
/// Attempts run back to back with no delay and stop at the first success.
/// Each failure is logged; the function itself never fails.
pub async fn fetch_with_retry(
    provider: &dyn WeatherProvider,
    date: NaiveDate,
    city: &str,
    max_attempts: u32,
) -> FetchOutcome {
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match provider.fetch(date, city).await {
            Ok(record) => {
                return FetchOutcome::Fetched {
                    record,
                    attempts: attempt,
                }
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} to fetch weather for {} on {} failed: {}",
                    attempt, max_attempts, city, date, e
                );
                last_error = Some(e);
            }
        }
    }

    error!(
        "Giving up on weather for {} on {} after {} attempts - check the connection, API key, city name, date and request limit",
        city, date, max_attempts
    );
    FetchOutcome::Exhausted {
        attempts: max_attempts,
        last_error,
    }
}
