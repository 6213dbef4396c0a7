use crate::parser::error::ParserError;
use crate::types::city::City;
use crate::types::derived_record::DerivedRecord;

/// The derived daily series of one city, ordered by date.
///
/// Dates are unique. The city (and so its latitude) is fixed at construction and
/// only readable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CityTimeSeries {
    city: City,
    records: Vec<DerivedRecord>,
}

impl CityTimeSeries {
    /// Builds a series, sorting the records chronologically.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::DuplicateDate`] if two records share a date.
    pub fn new(city: City, mut records: Vec<DerivedRecord>) -> Result<Self, ParserError> {
        records.sort_by_key(|r| r.date());
        if let Some(pair) = records.windows(2).find(|w| w[0].date() == w[1].date()) {
            return Err(ParserError::DuplicateDate {
                city: city.name.clone(),
                date: pair[0].date(),
            });
        }
        Ok(Self { city, records })
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn records(&self) -> &[DerivedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
