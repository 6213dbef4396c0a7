//! Fixed limits of the comfort rule, bundled into one immutable value.
//!
//! [`ComfortThresholds::default`] holds the domain constants. Alternate thresholds can
//! be passed to [`crate::ComfortClassifier::new`], mainly for testing.

/// A "great" and a "good" band of the same criterion. The great band is the stricter one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banded<T> {
    pub great: T,
    pub good: T,
}

/// Limits on the day's temperatures (°C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureBand {
    /// Lowest allowed daily minimum.
    pub min_at_least: f64,
    /// Highest allowed daily maximum.
    pub max_at_most: f64,
    /// Largest allowed difference between maximum and minimum.
    pub swing_at_most: f64,
    /// Inclusive range for the mean of min, max and both reference temperatures.
    pub mean_between: (f64, f64),
}

/// Limits on the two reference-time dew points (°C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointBand {
    /// The lower of the two dew points must be at least this.
    pub lowest_at_least: f64,
    /// The higher of the two dew points must be at most this.
    pub highest_at_most: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumBand {
    pub at_least: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaximumBand {
    pub at_most: f64,
}

/// How the five criterion scores combine into a day level.
///
/// Each satisfied condition adds one level. With the default values the great
/// condition implies the good one, so a day lands on exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRule {
    pub great_total_above: u8,
    pub great_max_zero_criteria: u8,
    pub good_total_above: u8,
    pub good_max_zero_criteria: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortThresholds {
    pub temperature: Banded<TemperatureBand>,
    pub dew_point: Banded<DewPointBand>,
    /// Sunlight percentage (0-100).
    pub sunlight: Banded<MinimumBand>,
    /// Daily rainfall (mm).
    pub rainfall: Banded<MaximumBand>,
    /// Maximum wind gust (km/h).
    pub wind: Banded<MaximumBand>,
    pub day_rule: DayRule,
}

impl Default for ComfortThresholds {
    fn default() -> Self {
        Self {
            temperature: Banded {
                great: TemperatureBand {
                    min_at_least: 15.0,
                    max_at_most: 30.0,
                    swing_at_most: 12.5,
                    mean_between: (20.0, 25.0),
                },
                good: TemperatureBand {
                    min_at_least: 10.0,
                    max_at_most: 32.5,
                    swing_at_most: 17.5,
                    mean_between: (17.5, 27.5),
                },
            },
            dew_point: Banded {
                great: DewPointBand {
                    lowest_at_least: 10.0,
                    highest_at_most: 18.0,
                },
                good: DewPointBand {
                    lowest_at_least: 0.0,
                    highest_at_most: 21.0,
                },
            },
            sunlight: Banded {
                great: MinimumBand { at_least: 75.0 },
                good: MinimumBand { at_least: 50.0 },
            },
            rainfall: Banded {
                great: MaximumBand { at_most: 0.25 }, // about an hour of drizzle
                good: MaximumBand { at_most: 1.0 },   // about an hour of light rain
            },
            wind: Banded {
                great: MaximumBand { at_most: 28.0 }, // Beaufort 4, moderate breeze
                good: MaximumBand { at_most: 38.0 },  // Beaufort 5, fresh breeze
            },
            day_rule: DayRule {
                great_total_above: 8,
                great_max_zero_criteria: 0,
                good_total_above: 4,
                good_max_zero_criteria: 1,
            },
        }
    }
}

impl TemperatureBand {
    pub fn admits(&self, min: f64, max: f64, mean: f64) -> bool {
        min >= self.min_at_least
            && max <= self.max_at_most
            && max - min <= self.swing_at_most
            && mean >= self.mean_between.0
            && mean <= self.mean_between.1
    }
}

impl DewPointBand {
    pub fn admits(&self, lowest: f64, highest: f64) -> bool {
        lowest >= self.lowest_at_least && highest <= self.highest_at_most
    }
}

impl MinimumBand {
    pub fn admits(&self, value: f64) -> bool {
        value >= self.at_least
    }
}

impl MaximumBand {
    pub fn admits(&self, value: f64) -> bool {
        value <= self.at_most
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_great_bands_are_nested_in_good_bands() {
        let t = ComfortThresholds::default();

        let (great, good) = (t.temperature.great, t.temperature.good);
        assert!(great.min_at_least >= good.min_at_least);
        assert!(great.max_at_most <= good.max_at_most);
        assert!(great.swing_at_most <= good.swing_at_most);
        assert!(great.mean_between.0 >= good.mean_between.0);
        assert!(great.mean_between.1 <= good.mean_between.1);

        assert!(t.dew_point.great.lowest_at_least >= t.dew_point.good.lowest_at_least);
        assert!(t.dew_point.great.highest_at_most <= t.dew_point.good.highest_at_most);
        assert!(t.sunlight.great.at_least >= t.sunlight.good.at_least);
        assert!(t.rainfall.great.at_most <= t.rainfall.good.at_most);
        assert!(t.wind.great.at_most <= t.wind.good.at_most);

        let rule = t.day_rule;
        assert!(rule.great_total_above >= rule.good_total_above);
        assert!(rule.great_max_zero_criteria <= rule.good_max_zero_criteria);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let t = ComfortThresholds::default();
        assert!(t.rainfall.great.admits(0.25));
        assert!(!t.rainfall.great.admits(0.26));
        assert!(t.sunlight.good.admits(50.0));
        assert!(t.temperature.great.admits(15.0, 27.5, 20.0));
        assert!(!t.temperature.great.admits(15.0, 27.6, 20.0));
    }
}
