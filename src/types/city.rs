//! The cities whose daily weather is analysed.

use serde::{Deserialize, Serialize};

/// A city whose daily weather series is analysed.
///
/// The latitude drives the day-length calculation behind the sunlight percentage
/// (southern hemisphere latitudes are negative). Both name and latitude are fixed for
/// the lifetime of a series.
///
/// # Examples
///
/// ```
/// use daycomfort::City;
///
/// let hobart = City::new("Hobart", -42.8821);
/// assert_eq!(hobart.name, "Hobart");
/// assert!(hobart.latitude < 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Display name, also used as the provider query and the source sheet name.
    pub name: String,
    /// Geographic latitude in degrees.
    pub latitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
        }
    }
}

/// The five Australian capitals the analysis covers out of the box.
pub fn default_cities() -> Vec<City> {
    vec![
        City::new("Melbourne", -37.8136),
        City::new("Sydney", -33.8688),
        City::new("Adelaide", -34.9285),
        City::new("Brisbane", -27.4698),
        City::new("Perth", -31.9505),
    ]
}
