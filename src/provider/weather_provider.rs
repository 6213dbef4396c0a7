//! The seam between the analysis pipeline and any remote source of daily weather.

use crate::provider::error::ProviderError;
use crate::types::weather_record::WeatherRecord;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A source of same-day replacement records used to fill gaps in a city's series.
///
/// Implementations report every transport or decoding problem through
/// [`ProviderError`]; retrying is left to [`crate::fetch_with_retry`].
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use chrono::NaiveDate;
/// use daycomfort::{ProviderError, WeatherProvider, WeatherRecord};
///
/// struct Offline;
///
/// #[async_trait]
/// impl WeatherProvider for Offline {
///     async fn fetch(&self, date: NaiveDate, city: &str) -> Result<WeatherRecord, ProviderError> {
///         Err(ProviderError::NoWeatherData {
///             city: city.to_string(),
///             date: date.to_string(),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the weather record of `city` for `date`.
    async fn fetch(&self, date: NaiveDate, city: &str) -> Result<WeatherRecord, ProviderError>;
}
