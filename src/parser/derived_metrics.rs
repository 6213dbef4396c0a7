//! Dew point and sunlight percentage, the two indicators derived from each day's base fields.
//!
//! Both are pure functions of their inputs.

use crate::parser::error::ParserError;
use crate::types::city::City;
use crate::types::city_series::CityTimeSeries;
use crate::types::daily_record::DailyRecord;
use crate::types::derived_record::DerivedRecord;
use crate::utils::round_to_tenth;
use chrono::Datelike;
use std::f64::consts::PI;

// Magnus-type dew point constants (Arden Buck).
const DEW_B: f64 = 18.678;
const DEW_C: f64 = 257.14; // °C
const DEW_D: f64 = 234.5; // °C

/// Axial tilt used by the declination approximation, in degrees.
const EARTH_TILT_DEG: f64 = 23.45;

/// Dew point (°C, one decimal) for relative humidity `rh` (%) at temperature `t` (°C).
///
/// Returns `None` when the result is not a finite number, which happens for
/// a relative humidity of zero or below.
///
/// # Examples
///
/// ```
/// use daycomfort::dew_point;
///
/// assert_eq!(dew_point(50.0, 20.0), Some(9.3));
/// assert_eq!(dew_point(0.0, 15.0), None);
/// ```
pub fn dew_point(rh: f64, t: f64) -> Option<f64> {
    let gamma = (rh / 100.0 * ((DEW_B - t / DEW_D) * (t / (DEW_C + t))).exp()).ln();
    let dew = DEW_C * gamma / (DEW_B - gamma);
    dew.is_finite().then(|| round_to_tenth(dew))
}

/// Solar declination in radians for a day of the year (1-based).
pub fn solar_declination(day_of_year: u32) -> f64 {
    -EARTH_TILT_DEG.to_radians() * (2.0 * PI * (f64::from(day_of_year) + 10.0) / 365.0).cos()
}

/// Hours between sunrise and sunset at `latitude` (degrees) on `day_of_year`.
///
/// Inside the polar circles the hour-angle argument leaves [-1, 1]; it is clamped,
/// giving 24 hours of polar day or 0 hours of polar night.
pub fn day_length(day_of_year: u32, latitude: f64) -> f64 {
    let cos_hour_angle =
        (-latitude.to_radians().tan() * solar_declination(day_of_year).tan()).clamp(-1.0, 1.0);
    cos_hour_angle.acos() * 24.0 / PI
}

/// Share of the day length that was sunlit, in percent with one decimal, clamped to [0, 100].
///
/// Returns `None` during polar night, when the day length is zero.
pub fn sunlight_percentage(day_of_year: u32, sunlight_hours: f64, latitude: f64) -> Option<f64> {
    let day_length = day_length(day_of_year, latitude);
    if day_length <= 0.0 {
        return None;
    }
    let percentage = round_to_tenth(sunlight_hours / day_length * 100.0);
    percentage
        .is_finite()
        .then(|| percentage.clamp(0.0, 100.0))
}

/// Computes the derived indicators of one day at the given latitude.
pub fn derive_record(base: DailyRecord, latitude: f64) -> DerivedRecord {
    let morning_dew_point = base
        .morning_humidity
        .zip(base.morning_temperature)
        .and_then(|(rh, t)| dew_point(rh, t));
    let afternoon_dew_point = base
        .afternoon_humidity
        .zip(base.afternoon_temperature)
        .and_then(|(rh, t)| dew_point(rh, t));
    let sunlight_percentage = base
        .sunlight_hours
        .and_then(|hours| sunlight_percentage(base.date.ordinal(), hours, latitude));

    DerivedRecord {
        base,
        morning_dew_point,
        afternoon_dew_point,
        sunlight_percentage,
    }
}

/// Derives every record of a city and assembles its time series.
pub fn derive_series(
    city: City,
    records: Vec<DailyRecord>,
) -> Result<CityTimeSeries, ParserError> {
    let latitude = city.latitude;
    let derived = records
        .into_iter()
        .map(|record| derive_record(record, latitude))
        .collect();
    CityTimeSeries::new(city, derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const MELBOURNE_LAT: f64 = -37.8136;

    #[test]
    fn test_dew_point_matches_formula() {
        // Recompute from the constants rather than trusting a literal.
        let (rh, t): (f64, f64) = (50.0, 20.0);
        let gamma: f64 = (rh / 100.0 * ((18.678 - t / 234.5) * (t / (257.14 + t))).exp()).ln();
        let expected = (257.14 * gamma / (18.678 - gamma) * 10.0).round() / 10.0;

        assert_eq!(dew_point(rh, t), Some(expected));
        assert_eq!(dew_point(rh, t), Some(9.3));
    }

    #[test]
    fn test_dew_point_below_temperature_when_unsaturated() {
        for t in [-5.0, 0.0, 12.0, 31.0] {
            let dew = dew_point(60.0, t).unwrap();
            assert!(dew < t, "dew point {dew} should be below {t}");
        }
    }

    #[test]
    fn test_day_length_follows_seasons() {
        // Southern hemisphere: long days in January, short in June.
        let summer = day_length(1, MELBOURNE_LAT);
        let winter = day_length(172, MELBOURNE_LAT);
        assert!((summer - 14.57).abs() < 0.05, "summer day length {summer}");
        assert!((winter - 9.38).abs() < 0.05, "winter day length {winter}");
    }

    #[test]
    fn test_day_length_in_polar_regions() {
        assert_eq!(day_length(172, 80.0), 24.0);
        assert_eq!(day_length(172, -80.0), 0.0);
        assert_eq!(sunlight_percentage(172, 0.0, -80.0), None);
    }

    #[test]
    fn test_sunlight_percentage_clamped() {
        // More sunshine hours than day length.
        assert_eq!(sunlight_percentage(172, 14.0, MELBOURNE_LAT), Some(100.0));
        // Negative sunshine hours from a bad cell.
        assert_eq!(sunlight_percentage(172, -2.0, MELBOURNE_LAT), Some(0.0));

        let half = sunlight_percentage(1, 7.3, MELBOURNE_LAT).unwrap();
        assert!((0.0..=100.0).contains(&half));
        assert!((half - 50.1).abs() < 0.2, "got {half}");
    }

    #[test]
    fn test_derive_record_leaves_missing_inputs_missing() {
        let mut base = DailyRecord::empty(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
        base.morning_temperature = Some(20.0);
        base.morning_humidity = Some(50.0);
        base.afternoon_temperature = Some(24.0);
        base.sunlight_hours = Some(7.3);

        let derived = derive_record(base, MELBOURNE_LAT);

        assert_eq!(derived.morning_dew_point, Some(9.3));
        assert_eq!(derived.afternoon_dew_point, None);
        assert!(derived.sunlight_percentage.is_some());
    }

    #[test]
    fn test_derive_series_keeps_city() {
        let records = vec![
            DailyRecord::empty(NaiveDate::from_ymd_opt(2017, 1, 2).unwrap()),
            DailyRecord::empty(NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()),
        ];
        let series = derive_series(City::new("Melbourne", MELBOURNE_LAT), records).unwrap();

        assert_eq!(series.city().latitude, MELBOURNE_LAT);
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.records()[0].date(),
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()
        );
    }
}
