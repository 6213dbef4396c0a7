//! Names the nine observed quantities every daily record carries, and maps each one
//! to its column in the source table and in the derived-series cache.

use std::fmt;

/// One of the nine base weather quantities recorded for a city on a given day.
///
/// Temperature and humidity are observed at two fixed reference times,
/// 09:00 ("morning") and 15:00 ("afternoon") local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseField {
    /// Daily minimum temperature (°C).
    MinTemperature,
    /// Daily maximum temperature (°C).
    MaxTemperature,
    /// Total rainfall (mm).
    Rainfall,
    /// Bright sunshine (hours).
    SunlightHours,
    /// Speed of the maximum wind gust (km/h).
    WindGust,
    /// Temperature at 09:00 (°C).
    MorningTemperature,
    /// Relative humidity at 09:00 (%).
    MorningHumidity,
    /// Temperature at 15:00 (°C).
    AfternoonTemperature,
    /// Relative humidity at 15:00 (%).
    AfternoonHumidity,
}

impl BaseField {
    /// All base fields, in source-table column order.
    pub const ALL: [BaseField; 9] = [
        BaseField::MinTemperature,
        BaseField::MaxTemperature,
        BaseField::Rainfall,
        BaseField::SunlightHours,
        BaseField::WindGust,
        BaseField::MorningTemperature,
        BaseField::MorningHumidity,
        BaseField::AfternoonTemperature,
        BaseField::AfternoonHumidity,
    ];

    /// Short column name used in the derived-series cache.
    pub fn column_name(&self) -> &'static str {
        match self {
            BaseField::MinTemperature => "min_temp",
            BaseField::MaxTemperature => "max_temp",
            BaseField::Rainfall => "rain",
            BaseField::SunlightHours => "sun",
            BaseField::WindGust => "wind",
            BaseField::MorningTemperature => "temp_9",
            BaseField::MorningHumidity => "hum_9",
            BaseField::AfternoonTemperature => "temp_3",
            BaseField::AfternoonHumidity => "hum_3",
        }
    }

    /// Column header as it appears in a city's source sheet.
    pub fn source_header(&self) -> &'static str {
        match self {
            BaseField::MinTemperature => "Minimum temperature (°C)",
            BaseField::MaxTemperature => "Maximum temperature (°C)",
            BaseField::Rainfall => "Rainfall (mm)",
            BaseField::SunlightHours => "Sunshine (hours)",
            BaseField::WindGust => "Speed of maximum wind gust (km/h)",
            BaseField::MorningTemperature => "9am Temperature (°C)",
            BaseField::MorningHumidity => "9am relative humidity (%)",
            BaseField::AfternoonTemperature => "3pm Temperature (°C)",
            BaseField::AfternoonHumidity => "3pm relative humidity (%)",
        }
    }
}

/// Formats a `BaseField` using its cache column name.
///
/// # Examples
///
/// ```
/// use daycomfort::BaseField;
///
/// assert_eq!(BaseField::WindGust.to_string(), "wind");
/// assert_eq!(format!("{}", BaseField::MorningHumidity), "hum_9");
/// ```
impl fmt::Display for BaseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
