//! Fills missing base fields of a city's daily records from a [`WeatherProvider`].

use crate::provider::retry::{fetch_with_retry, FetchOutcome, DEFAULT_MAX_ATTEMPTS};
use crate::provider::weather_provider::WeatherProvider;
use crate::types::base_field::BaseField;
use crate::types::city::City;
use crate::types::daily_record::DailyRecord;
use crate::types::weather_record::WeatherRecord;
use chrono::NaiveDate;
use log::{debug, info, warn};

/// What happened to one day during gap filling.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStatus {
    /// Nothing was missing; the provider was not asked.
    Complete,
    /// Every missing field was filled.
    Filled { attempts: u32 },
    /// The provider answered but some values it returned were unusable.
    PartiallyFilled {
        attempts: u32,
        still_missing: Vec<BaseField>,
    },
    /// All attempts failed; the day keeps its gaps.
    Failed { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayFill {
    pub date: NaiveDate,
    pub status: FillStatus,
}

/// Per-day outcome of filling one city's series.
#[derive(Debug, Clone, PartialEq)]
pub struct FillReport {
    pub city: String,
    pub days: Vec<DayFill>,
}

impl FillReport {
    /// Days that still have gaps after filling.
    pub fn unfilled_dates(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| {
                matches!(
                    d.status,
                    FillStatus::Failed { .. } | FillStatus::PartiallyFilled { .. }
                )
            })
            .map(|d| d.date)
            .collect()
    }

    /// Number of days that needed the provider at all.
    pub fn incomplete_days(&self) -> usize {
        self.days
            .iter()
            .filter(|d| d.status != FillStatus::Complete)
            .count()
    }

    pub fn filled_days(&self) -> usize {
        self.days
            .iter()
            .filter(|d| matches!(d.status, FillStatus::Filled { .. }))
            .count()
    }
}

/// Copies provider values into the fields of `record` that are still `None`.
///
/// Present values are never touched. Non-finite provider values count as absent.
/// Returns the number of fields filled.
pub fn merge_missing(record: &mut DailyRecord, replacement: &WeatherRecord) -> usize {
    let mut filled = 0;
    for field in BaseField::ALL {
        if record.get(field).is_some() {
            continue;
        }
        let value = replacement.value(field);
        if value.is_finite() {
            record.set(field, Some(value));
            filled += 1;
        }
    }
    filled
}

/// Walks a city's records and asks the provider for every day with a gap.
pub struct GapFiller<'a> {
    provider: &'a dyn WeatherProvider,
    max_attempts: u32,
}

impl<'a> GapFiller<'a> {
    pub fn new(provider: &'a dyn WeatherProvider) -> Self {
        Self {
            provider,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Fills `records` in place, one sequential provider request per incomplete day.
    ///
    /// Provider failures never escape: a day whose attempts are exhausted is reported
    /// as [`FillStatus::Failed`] and left as it was.
    pub async fn fill(&self, city: &City, records: &mut [DailyRecord]) -> FillReport {
        let mut days = Vec::with_capacity(records.len());

        for record in records.iter_mut() {
            let missing = record.missing_fields();
            if missing.is_empty() {
                days.push(DayFill {
                    date: record.date,
                    status: FillStatus::Complete,
                });
                continue;
            }
            debug!(
                "{} on {} is missing {:?}, requesting replacement",
                city.name, record.date, missing
            );

            let outcome =
                fetch_with_retry(self.provider, record.date, &city.name, self.max_attempts).await;
            let status = match outcome {
                FetchOutcome::Fetched {
                    record: replacement,
                    attempts,
                } => {
                    merge_missing(record, &replacement);
                    let still_missing = record.missing_fields();
                    if still_missing.is_empty() {
                        FillStatus::Filled { attempts }
                    } else {
                        warn!(
                            "Replacement for {} on {} left {:?} unfilled",
                            city.name, record.date, still_missing
                        );
                        FillStatus::PartiallyFilled {
                            attempts,
                            still_missing,
                        }
                    }
                }
                FetchOutcome::Exhausted { attempts, .. } => FillStatus::Failed { attempts },
            };
            days.push(DayFill {
                date: record.date,
                status,
            });
        }

        let report = FillReport {
            city: city.name.clone(),
            days,
        };
        info!(
            "Filled {} of {} incomplete days for {}",
            report.filled_days(),
            report.incomplete_days(),
            city.name
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::error::ProviderError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, 8, day).unwrap()
    }

    fn replacement(date: NaiveDate) -> WeatherRecord {
        WeatherRecord {
            date,
            min_temperature: 101.0,
            max_temperature: 102.0,
            rainfall: 103.0,
            sunlight_hours: 104.0,
            wind_gust: 105.0,
            morning_temperature: 106.0,
            morning_humidity: 107.0,
            afternoon_temperature: 108.0,
            afternoon_humidity: 109.0,
        }
    }

    /// Answers every request with values that differ from any sheet value.
    struct FixedProvider {
        calls: AtomicU32,
        sunlight_hours: f64,
    }

    impl FixedProvider {
        fn new() -> Self {
            Self {
                calls: AtomicU32::new(0),
                sunlight_hours: 104.0,
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn fetch(&self, date: NaiveDate, _city: &str) -> Result<WeatherRecord, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut record = replacement(date);
            record.sunlight_hours = self.sunlight_hours;
            Ok(record)
        }
    }

    struct FailingProvider {
        calls: AtomicU32,
    }

    #[async_trait]
    impl WeatherProvider for FailingProvider {
        async fn fetch(&self, date: NaiveDate, city: &str) -> Result<WeatherRecord, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::NoWeatherData {
                city: city.to_string(),
                date: date.to_string(),
            })
        }
    }

    fn partial_record(day: u32) -> DailyRecord {
        let mut record = DailyRecord::empty(date(day));
        record.min_temperature = Some(8.5);
        record.rainfall = Some(0.0);
        record.morning_humidity = Some(66.0);
        record
    }

    fn complete_record(day: u32) -> DailyRecord {
        let mut record = DailyRecord::empty(date(day));
        for field in BaseField::ALL {
            record.set(field, Some(1.0));
        }
        record
    }

    fn city() -> City {
        City::new("Brisbane", -27.4698)
    }

    #[tokio::test]
    async fn test_only_missing_fields_are_replaced() {
        let provider = FixedProvider::new();
        let mut records = vec![partial_record(1)];

        let report = GapFiller::new(&provider).fill(&city(), &mut records).await;

        let record = &records[0];
        assert_eq!(record.min_temperature, Some(8.5));
        assert_eq!(record.rainfall, Some(0.0));
        assert_eq!(record.morning_humidity, Some(66.0));
        assert_eq!(record.max_temperature, Some(102.0));
        assert_eq!(record.sunlight_hours, Some(104.0));
        assert_eq!(record.wind_gust, Some(105.0));
        assert_eq!(record.morning_temperature, Some(106.0));
        assert_eq!(record.afternoon_temperature, Some(108.0));
        assert_eq!(record.afternoon_humidity, Some(109.0));
        assert_eq!(
            report.days,
            vec![DayFill {
                date: date(1),
                status: FillStatus::Filled { attempts: 1 }
            }]
        );
    }

    #[tokio::test]
    async fn test_complete_days_skip_the_provider() {
        let provider = FixedProvider::new();
        let mut records = vec![complete_record(1), partial_record(2), complete_record(3)];

        let report = GapFiller::new(&provider).fill(&city(), &mut records).await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert_eq!(records[0], complete_record(1));
        assert_eq!(records[2], complete_record(3));
        assert_eq!(report.incomplete_days(), 1);
        assert_eq!(report.filled_days(), 1);
        assert!(report.unfilled_dates().is_empty());
    }

    #[tokio::test]
    async fn test_failing_provider_leaves_record_unfilled() {
        let provider = FailingProvider {
            calls: AtomicU32::new(0),
        };
        let original = partial_record(4);
        let mut records = vec![original.clone()];

        let report = GapFiller::new(&provider).fill(&city(), &mut records).await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
        assert_eq!(records[0], original);
        assert_eq!(report.days[0].status, FillStatus::Failed { attempts: 3 });
        assert_eq!(report.unfilled_dates(), vec![date(4)]);
    }

    #[tokio::test]
    async fn test_non_finite_replacement_reports_partial_fill() {
        let mut provider = FixedProvider::new();
        provider.sunlight_hours = f64::NAN;
        let mut records = vec![partial_record(6)];

        let report = GapFiller::new(&provider)
            .with_max_attempts(1)
            .fill(&city(), &mut records)
            .await;

        assert_eq!(records[0].sunlight_hours, None);
        assert_eq!(
            report.days[0].status,
            FillStatus::PartiallyFilled {
                attempts: 1,
                still_missing: vec![BaseField::SunlightHours]
            }
        );
        assert_eq!(report.unfilled_dates(), vec![date(6)]);
    }

    #[test]
    fn test_merge_missing_counts_filled_fields() {
        let mut record = partial_record(9);
        let filled = merge_missing(&mut record, &replacement(date(9)));

        assert_eq!(filled, 6);
        assert!(record.is_complete());
    }
}
