use crate::types::base_field::BaseField;
use chrono::NaiveDate;

/// A same-day replacement record as returned by a [`crate::WeatherProvider`].
///
/// Unlike [`crate::DailyRecord`] the shape is fixed: a provider either returns
/// every field or fails.
#[derive(Debug, PartialEq, Clone)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub rainfall: f64,               // sum of sub-daily precipitation
    pub sunlight_hours: f64,
    pub wind_gust: f64,              // max of sub-daily wind speed
    pub morning_temperature: f64,    // 09:00
    pub morning_humidity: f64,       // 09:00
    pub afternoon_temperature: f64,  // 15:00
    pub afternoon_humidity: f64,     // 15:00
}

impl WeatherRecord {
    pub fn value(&self, field: BaseField) -> f64 {
        match field {
            BaseField::MinTemperature => self.min_temperature,
            BaseField::MaxTemperature => self.max_temperature,
            BaseField::Rainfall => self.rainfall,
            BaseField::SunlightHours => self.sunlight_hours,
            BaseField::WindGust => self.wind_gust,
            BaseField::MorningTemperature => self.morning_temperature,
            BaseField::MorningHumidity => self.morning_humidity,
            BaseField::AfternoonTemperature => self.afternoon_temperature,
            BaseField::AfternoonHumidity => self.afternoon_humidity,
        }
    }
}
