//! Defines the three-level `ComfortScore` assigned to each classified day.

use std::fmt;

/// Overall comfort classification of a single day.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Great > Good > Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComfortScore {
    /// Level 0: fails the comfort rule.
    Bad = 0,
    /// Level 1: meets the looser comfort rule.
    Good = 1,
    /// Level 2: meets the strict comfort rule.
    Great = 2,
}

impl ComfortScore {
    /// Every level, best first. This is the row order of a [`crate::DayCountSummary`].
    pub const BEST_FIRST: [ComfortScore; 3] =
        [ComfortScore::Great, ComfortScore::Good, ComfortScore::Bad];

    /// Converts a numeric level (0, 1 or 2) into a `ComfortScore`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daycomfort::ComfortScore;
    ///
    /// assert_eq!(ComfortScore::from_level(2), Some(ComfortScore::Great));
    /// assert_eq!(ComfortScore::from_level(0), Some(ComfortScore::Bad));
    /// assert_eq!(ComfortScore::from_level(3), None);
    /// ```
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(ComfortScore::Bad),
            1 => Some(ComfortScore::Good),
            2 => Some(ComfortScore::Great),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Row label used in persisted summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ComfortScore::Great => "Great Day",
            ComfortScore::Good => "Good Day",
            ComfortScore::Bad => "Bad Day",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::BEST_FIRST
            .into_iter()
            .find(|score| score.label() == label)
    }
}

impl fmt::Display for ComfortScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_ordering() {
        assert!(ComfortScore::Great > ComfortScore::Good);
        assert!(ComfortScore::Good > ComfortScore::Bad);

        let mut scores = vec![ComfortScore::Good, ComfortScore::Great, ComfortScore::Bad];
        scores.sort();
        assert_eq!(
            scores,
            vec![ComfortScore::Bad, ComfortScore::Good, ComfortScore::Great]
        );
    }

    #[test]
    fn test_label_lookup() {
        for score in ComfortScore::BEST_FIRST {
            assert_eq!(ComfortScore::from_label(score.label()), Some(score));
            assert_eq!(ComfortScore::from_level(score.level()), Some(score));
        }
        assert_eq!(ComfortScore::from_label("Okay Day"), None);
    }
}
