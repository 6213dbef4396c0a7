use crate::types::base_field::BaseField;
use chrono::NaiveDate;

/// One calendar day of observations for one city.
///
/// Every field is optional: source sheets routinely have empty cells, and the
/// gap filler replaces only the values that are still `None`.
#[derive(Debug, PartialEq, Clone)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub min_temperature: Option<f64>,       // min_temp (°C)
    pub max_temperature: Option<f64>,       // max_temp (°C)
    pub rainfall: Option<f64>,              // rain (mm)
    pub sunlight_hours: Option<f64>,        // sun (h)
    pub wind_gust: Option<f64>,             // wind (km/h)
    pub morning_temperature: Option<f64>,   // temp_9 (°C)
    pub morning_humidity: Option<f64>,      // hum_9 (%)
    pub afternoon_temperature: Option<f64>, // temp_3 (°C)
    pub afternoon_humidity: Option<f64>,    // hum_3 (%)
}

impl DailyRecord {
    /// A record for `date` with every field missing.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            min_temperature: None,
            max_temperature: None,
            rainfall: None,
            sunlight_hours: None,
            wind_gust: None,
            morning_temperature: None,
            morning_humidity: None,
            afternoon_temperature: None,
            afternoon_humidity: None,
        }
    }

    pub fn get(&self, field: BaseField) -> Option<f64> {
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

    pub fn set(&mut self, field: BaseField, value: Option<f64>) {
        let slot = match field {
            BaseField::MinTemperature => &mut self.min_temperature,
            BaseField::MaxTemperature => &mut self.max_temperature,
            BaseField::Rainfall => &mut self.rainfall,
            BaseField::SunlightHours => &mut self.sunlight_hours,
            BaseField::WindGust => &mut self.wind_gust,
            BaseField::MorningTemperature => &mut self.morning_temperature,
            BaseField::MorningHumidity => &mut self.morning_humidity,
            BaseField::AfternoonTemperature => &mut self.afternoon_temperature,
            BaseField::AfternoonHumidity => &mut self.afternoon_humidity,
        };
        *slot = value;
    }

    /// Base fields that are still missing, in column order.
    pub fn missing_fields(&self) -> Vec<BaseField> {
        BaseField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        BaseField::ALL.iter().all(|field| self.get(*field).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_follow_column_order() {
        let mut record = DailyRecord::empty(NaiveDate::from_ymd_opt(2017, 3, 4).unwrap());
        for field in BaseField::ALL {
            record.set(field, Some(1.0));
        }
        assert!(record.is_complete());

        record.set(BaseField::AfternoonHumidity, None);
        record.set(BaseField::Rainfall, None);

        assert!(!record.is_complete());
        assert_eq!(
            record.missing_fields(),
            vec![BaseField::Rainfall, BaseField::AfternoonHumidity]
        );
    }

    #[test]
    fn test_set_then_get_targets_single_field() {
        let mut record = DailyRecord::empty(NaiveDate::from_ymd_opt(2017, 3, 4).unwrap());
        record.set(BaseField::WindGust, Some(41.0));

        assert_eq!(record.wind_gust, Some(41.0));
        assert_eq!(record.get(BaseField::WindGust), Some(41.0));
        assert_eq!(record.missing_fields().len(), 8);
    }
}
