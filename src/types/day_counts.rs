//! Per-city tallies of classified days.

use crate::types::comfort_score::ComfortScore;
use std::fmt;

/// How many days of one city landed on each comfort level.
///
/// `excluded` counts days that could not be classified because a value was still
/// missing after gap filling. They are not part of the three levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayCounts {
    pub great: usize,
    pub good: usize,
    pub bad: usize,
    pub excluded: usize,
}

impl DayCounts {
    pub fn get(&self, score: ComfortScore) -> usize {
        match score {
            ComfortScore::Great => self.great,
            ComfortScore::Good => self.good,
            ComfortScore::Bad => self.bad,
        }
    }

    pub fn record(&mut self, score: Option<ComfortScore>) {
        match score {
            Some(ComfortScore::Great) => self.great += 1,
            Some(ComfortScore::Good) => self.good += 1,
            Some(ComfortScore::Bad) => self.bad += 1,
            None => self.excluded += 1,
        }
    }

    /// Number of days that were classified.
    pub fn classified(&self) -> usize {
        self.great + self.good + self.bad
    }
}

/// Day counts keyed by city name, in the order the cities were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayCountSummary {
    rows: Vec<(String, DayCounts)>,
}

impl DayCountSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a city's counts, replacing earlier counts for the same city in place.
    pub fn insert(&mut self, city: impl Into<String>, counts: DayCounts) {
        let city = city.into();
        match self.rows.iter_mut().find(|(name, _)| *name == city) {
            Some((_, existing)) => *existing = counts,
            None => self.rows.push((city, counts)),
        }
    }

    pub fn get(&self, city: &str) -> Option<&DayCounts> {
        self.rows
            .iter()
            .find(|(name, _)| name == city)
            .map(|(_, counts)| counts)
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayCounts)> {
        self.rows.iter().map(|(name, counts)| (name.as_str(), counts))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for DayCountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10}", "Day")?;
        for city in self.cities() {
            write!(f, " {city:>10}")?;
        }
        for score in ComfortScore::BEST_FIRST {
            write!(f, "\n{:<10}", score.label())?;
            for (_, counts) in self.iter() {
                write!(f, " {:>10}", counts.get(score))?;
            }
        }
        Ok(())
    }
}
