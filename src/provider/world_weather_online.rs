//! [`WeatherProvider`] backed by the World Weather Online historical ("past weather") API.

use crate::provider::error::ProviderError;
use crate::provider::weather_provider::WeatherProvider;
use crate::types::weather_record::WeatherRecord;
use crate::utils::round_to_tenth;
use async_trait::async_trait;
use bon::bon;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://api.worldweatheronline.com/premium/v1";

/// Hourly `time` values of the two daily reference observations.
const MORNING_REFERENCE: &str = "900";
const AFTERNOON_REFERENCE: &str = "1500";

/// Client for the World Weather Online past-weather endpoint.
///
/// One request returns one day for one city. Values in the response are strings;
/// they are parsed and reduced to a fixed-shape [`WeatherRecord`]:
///
/// * rainfall is the sum of the hourly `precipMM` values, rounded to one decimal,
/// * wind is the largest hourly `windspeedKmph`,
/// * reference temperature and humidity are taken from the `900` and `1500` hourly entries.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use daycomfort::{WeatherProvider, WorldWeatherOnline};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = WorldWeatherOnline::builder().api_key("my-key").build();
/// let record = provider
///     .fetch(NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(), "Melbourne")
///     .await?;
/// println!("Rain on the day: {} mm", record.rainfall);
/// # Ok(())
/// # }
/// ```
pub struct WorldWeatherOnline {
    api_key: String,
    base_url: String,
    client: Client,
}

#[bon]
impl WorldWeatherOnline {
    /// Creates a client for the given API key.
    ///
    /// # Arguments
    ///
    /// * `.api_key(..)`: **Required.** World Weather Online premium API key.
    /// * `.base_url(..)`: Optional. Overrides the API root, defaults to the public premium endpoint.
    #[builder]
    pub fn new(#[builder(into)] api_key: String, #[builder(into)] base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/past-weather.ashx", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for WorldWeatherOnline {
    async fn fetch(&self, date: NaiveDate, city: &str) -> Result<WeatherRecord, ProviderError> {
        let url = self.endpoint();
        let date_param = date.format("%Y-%m-%d").to_string();
        debug!("Requesting weather for {} on {} from {}", city, date_param, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("format", "json"),
                ("date", date_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url, e)
                });
            }
        };

        let envelope: WwoEnvelope = response
            .json()
            .await
            .map_err(|e| ProviderError::ResponseDecode { url, source: e })?;
        envelope.into_record(date, city)
    }
}

/// Parses a raw past-weather JSON body into a [`WeatherRecord`].
pub fn parse_past_weather(
    body: &str,
    date: NaiveDate,
    city: &str,
) -> Result<WeatherRecord, ProviderError> {
    let envelope: WwoEnvelope = serde_json::from_str(body)?;
    envelope.into_record(date, city)
}

// --- Response schema (only the parts that are read) ---

#[derive(Debug, Deserialize)]
struct WwoEnvelope {
    data: WwoData,
}

#[derive(Debug, Deserialize)]
struct WwoData {
    #[serde(default)]
    weather: Vec<WwoDay>,
    #[serde(default)]
    error: Vec<WwoMessage>,
}

#[derive(Debug, Deserialize)]
struct WwoMessage {
    msg: String,
}

#[derive(Debug, Deserialize)]
struct WwoDay {
    #[serde(rename = "mintempC")]
    min_temp_c: String,
    #[serde(rename = "maxtempC")]
    max_temp_c: String,
    #[serde(rename = "sunHour")]
    sun_hour: String,
    #[serde(default)]
    hourly: Vec<WwoHour>,
}

#[derive(Debug, Deserialize)]
struct WwoHour {
    time: String,
    #[serde(rename = "tempC")]
    temp_c: String,
    humidity: String,
    #[serde(rename = "precipMM")]
    precip_mm: String,
    #[serde(rename = "windspeedKmph")]
    windspeed_kmph: String,
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ProviderError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ProviderError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl WwoDay {
    fn reading_at(&self, time: &str) -> Result<&WwoHour, ProviderError> {
        self.hourly
            .iter()
            .find(|h| h.time.trim() == time)
            .ok_or_else(|| ProviderError::MissingReading {
                time: time.to_string(),
            })
    }
}

impl WwoEnvelope {
    fn into_record(self, date: NaiveDate, city: &str) -> Result<WeatherRecord, ProviderError> {
        if let Some(message) = self.data.error.first() {
            return Err(ProviderError::Rejected(message.msg.clone()));
        }
        let day = self
            .data
            .weather
            .first()
            .ok_or_else(|| ProviderError::NoWeatherData {
                city: city.to_string(),
                date: date.to_string(),
            })?;

        let morning = day.reading_at(MORNING_REFERENCE)?;
        let afternoon = day.reading_at(AFTERNOON_REFERENCE)?;

        let mut rainfall = 0.0;
        let mut wind_gust = f64::NEG_INFINITY;
        for hour in &day.hourly {
            rainfall += parse_number("precipMM", &hour.precip_mm)?;
            wind_gust = wind_gust.max(parse_number("windspeedKmph", &hour.windspeed_kmph)?);
        }

        Ok(WeatherRecord {
            date,
            min_temperature: parse_number("mintempC", &day.min_temp_c)?,
            max_temperature: parse_number("maxtempC", &day.max_temp_c)?,
            rainfall: round_to_tenth(rainfall),
            sunlight_hours: parse_number("sunHour", &day.sun_hour)?,
            wind_gust,
            morning_temperature: parse_number("tempC", &morning.temp_c)?,
            morning_humidity: parse_number("humidity", &morning.humidity)?,
            afternoon_temperature: parse_number("tempC", &afternoon.temp_c)?,
            afternoon_humidity: parse_number("humidity", &afternoon.humidity)?,
        })
    }
}
