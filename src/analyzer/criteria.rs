//! The five weather criteria. Each one scores a day 0, 1 or 2 against its bands.

use crate::analyzer::thresholds::{
    Banded, ComfortThresholds, DewPointBand, MaximumBand, MinimumBand, TemperatureBand,
};
use crate::types::derived_record::CompleteDay;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Temperature,
    DewPoint,
    Sunlight,
    Rainfall,
    Wind,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Temperature,
        Criterion::DewPoint,
        Criterion::Sunlight,
        Criterion::Rainfall,
        Criterion::Wind,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Scores `day` on this criterion alone.
    pub fn score(self, day: &CompleteDay, thresholds: &ComfortThresholds) -> u8 {
        match self {
            Criterion::Temperature => temperature_score(day, &thresholds.temperature),
            Criterion::DewPoint => dew_point_score(day, &thresholds.dew_point),
            Criterion::Sunlight => sunlight_score(day, &thresholds.sunlight),
            Criterion::Rainfall => rainfall_score(day, &thresholds.rainfall),
            Criterion::Wind => wind_score(day, &thresholds.wind),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Temperature => "temperature",
            Criterion::DewPoint => "dew point",
            Criterion::Sunlight => "sunlight",
            Criterion::Rainfall => "rainfall",
            Criterion::Wind => "wind",
        };
        f.write_str(name)
    }
}

/// One point for meeting the good band, one more for meeting the great band.
fn banded_score<T>(bands: &Banded<T>, admits: impl Fn(&T) -> bool) -> u8 {
    u8::from(admits(&bands.great)) + u8::from(admits(&bands.good))
}

pub fn temperature_score(day: &CompleteDay, bands: &Banded<TemperatureBand>) -> u8 {
    let (min, max) = (day.min_temperature, day.max_temperature);
    let mean = (min + max + day.morning_temperature + day.afternoon_temperature) / 4.0;
    banded_score(bands, |band| band.admits(min, max, mean))
}

pub fn dew_point_score(day: &CompleteDay, bands: &Banded<DewPointBand>) -> u8 {
    let lowest = day.morning_dew_point.min(day.afternoon_dew_point);
    let highest = day.morning_dew_point.max(day.afternoon_dew_point);
    banded_score(bands, |band| band.admits(lowest, highest))
}

pub fn sunlight_score(day: &CompleteDay, bands: &Banded<MinimumBand>) -> u8 {
    banded_score(bands, |band| band.admits(day.sunlight_percentage))
}

pub fn rainfall_score(day: &CompleteDay, bands: &Banded<MaximumBand>) -> u8 {
    banded_score(bands, |band| band.admits(day.rainfall))
}

pub fn wind_score(day: &CompleteDay, bands: &Banded<MaximumBand>) -> u8 {
    banded_score(bands, |band| band.admits(day.wind_gust))
}

/// Scores of one day on every criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionScores([u8; 5]);

impl CriterionScores {
    pub fn evaluate(day: &CompleteDay, thresholds: &ComfortThresholds) -> Self {
        Self(Criterion::ALL.map(|criterion| criterion.score(day, thresholds)))
    }

    /// Wraps raw scores given in [`Criterion::ALL`] order, or `None` if any score is above 2.
    pub fn from_array(scores: [u8; 5]) -> Option<Self> {
        scores.iter().all(|&score| score <= 2).then_some(Self(scores))
    }

    pub fn get(&self, criterion: Criterion) -> u8 {
        self.0[criterion.index()]
    }

    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Number of criteria that scored zero.
    pub fn zero_count(&self) -> u8 {
        self.0.iter().filter(|&&score| score == 0).count() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u8)> + '_ {
        Criterion::ALL.into_iter().zip(self.0.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pleasant_day() -> CompleteDay {
        CompleteDay {
            date: NaiveDate::from_ymd_opt(2017, 3, 14).unwrap(),
            min_temperature: 18.0,
            max_temperature: 26.0,
            morning_temperature: 21.0,
            afternoon_temperature: 24.0,
            morning_dew_point: 12.0,
            afternoon_dew_point: 15.0,
            sunlight_percentage: 80.0,
            rainfall: 0.0,
            wind_gust: 20.0,
        }
    }

    #[test]
    fn test_scores_stay_in_range() {
        let thresholds = ComfortThresholds::default();
        let mut day = pleasant_day();
        for min in [-10.0, 5.0, 12.0, 16.0, 22.0] {
            for swing in [2.0, 8.0, 15.0, 25.0] {
                for dew in [-8.0, 3.0, 11.0, 19.0, 26.0] {
                    day.min_temperature = min;
                    day.max_temperature = min + swing;
                    day.morning_temperature = min + swing / 3.0;
                    day.afternoon_temperature = min + swing * 0.8;
                    day.morning_dew_point = dew;
                    day.afternoon_dew_point = dew + 1.5;
                    for criterion in Criterion::ALL {
                        let score = criterion.score(&day, &thresholds);
                        assert!(score <= 2, "{criterion} scored {score}");
                    }

                    let mean = (day.min_temperature
                        + day.max_temperature
                        + day.morning_temperature
                        + day.afternoon_temperature)
                        / 4.0;
                    let both = [thresholds.temperature.great, thresholds.temperature.good]
                        .iter()
                        .all(|band| band.admits(day.min_temperature, day.max_temperature, mean));
                    assert_eq!(
                        temperature_score(&day, &thresholds.temperature) == 2,
                        both
                    );
                }
            }
        }
    }

    #[test]
    fn test_pleasant_day_scores_full_marks() {
        let scores = CriterionScores::evaluate(&pleasant_day(), &ComfortThresholds::default());
        assert_eq!(scores.total(), 10);
        assert_eq!(scores.zero_count(), 0);
    }

    #[test]
    fn test_temperature_bands() {
        let bands = ComfortThresholds::default().temperature;
        let mut day = pleasant_day();
        assert_eq!(temperature_score(&day, &bands), 2);

        // Swing of 15 is too wide for great but fine for good.
        day.min_temperature = 14.0;
        day.max_temperature = 29.0;
        day.morning_temperature = 17.0;
        day.afternoon_temperature = 27.0;
        assert_eq!(temperature_score(&day, &bands), 1);

        day.max_temperature = 35.0;
        assert_eq!(temperature_score(&day, &bands), 0);
    }

    #[test]
    fn test_dew_point_order_does_not_matter() {
        let bands = ComfortThresholds::default().dew_point;
        let mut day = pleasant_day();
        day.morning_dew_point = 20.0;
        day.afternoon_dew_point = 5.0;
        let forward = dew_point_score(&day, &bands);

        std::mem::swap(&mut day.morning_dew_point, &mut day.afternoon_dew_point);
        assert_eq!(dew_point_score(&day, &bands), forward);
        assert_eq!(forward, 1);
    }

    #[test]
    fn test_single_value_criteria() {
        let t = ComfortThresholds::default();
        let mut day = pleasant_day();

        day.sunlight_percentage = 60.0;
        day.rainfall = 0.5;
        day.wind_gust = 38.0;
        assert_eq!(sunlight_score(&day, &t.sunlight), 1);
        assert_eq!(rainfall_score(&day, &t.rainfall), 1);
        assert_eq!(wind_score(&day, &t.wind), 1);

        day.sunlight_percentage = 49.9;
        day.rainfall = 1.1;
        day.wind_gust = 38.1;
        assert_eq!(sunlight_score(&day, &t.sunlight), 0);
        assert_eq!(rainfall_score(&day, &t.rainfall), 0);
        assert_eq!(wind_score(&day, &t.wind), 0);
    }

    #[test]
    fn test_scores_iterate_in_criterion_order() {
        let scores = CriterionScores::from_array([2, 1, 0, 2, 1]).unwrap();
        let collected: Vec<_> = scores.iter().collect();
        assert_eq!(collected[2], (Criterion::Sunlight, 0));
        assert_eq!(scores.get(Criterion::Wind), 1);
        assert_eq!(scores.total(), 6);
        assert_eq!(scores.zero_count(), 1);
    }

    #[test]
    fn test_scores_above_two_are_rejected() {
        assert_eq!(CriterionScores::from_array([255; 5]), None);
        assert_eq!(CriterionScores::from_array([2, 2, 3, 0, 0]), None);
        assert_eq!(
            CriterionScores::from_array([2; 5]).map(|s| s.total()),
            Some(10)
        );
    }
}
