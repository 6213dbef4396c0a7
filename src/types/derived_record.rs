use crate::types::daily_record::DailyRecord;
use chrono::NaiveDate;

/// A [`DailyRecord`] together with the indicators derived from it.
///
/// Produced once by [`crate::derive_series`] and not mutated afterwards.
#[derive(Debug, PartialEq, Clone)]
pub struct DerivedRecord {
    pub base: DailyRecord,
    pub morning_dew_point: Option<f64>,   // dew_9 (°C)
    pub afternoon_dew_point: Option<f64>, // dew_3 (°C)
    pub sunlight_percentage: Option<f64>, // sun_perc (0-100)
}

/// A day with every value the comfort classifier reads present.
///
/// Obtained through [`DerivedRecord::complete`]; a day that cannot produce one is
/// excluded from classification.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CompleteDay {
    pub date: NaiveDate,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub morning_temperature: f64,
    pub afternoon_temperature: f64,
    pub morning_dew_point: f64,
    pub afternoon_dew_point: f64,
    pub sunlight_percentage: f64,
    pub rainfall: f64,
    pub wind_gust: f64,
}

impl DerivedRecord {
    pub fn date(&self) -> NaiveDate {
        self.base.date
    }

    /// Returns the classifier view of this day, or `None` if any base field or
    /// derived indicator is missing.
    pub fn complete(&self) -> Option<CompleteDay> {
        if !self.base.is_complete() {
            return None;
        }
        let base = &self.base;
        Some(CompleteDay {
            date: base.date,
            min_temperature: base.min_temperature?,
            max_temperature: base.max_temperature?,
            morning_temperature: base.morning_temperature?,
            afternoon_temperature: base.afternoon_temperature?,
            morning_dew_point: self.morning_dew_point?,
            afternoon_dew_point: self.afternoon_dew_point?,
            sunlight_percentage: self.sunlight_percentage?,
            rainfall: base.rainfall?,
            wind_gust: base.wind_gust?,
        })
    }
}
