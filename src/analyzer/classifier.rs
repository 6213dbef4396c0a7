use crate::analyzer::criteria::CriterionScores;
use crate::analyzer::thresholds::ComfortThresholds;
use crate::types::city_series::CityTimeSeries;
use crate::types::comfort_score::ComfortScore;
use crate::types::derived_record::{CompleteDay, DerivedRecord};
use chrono::NaiveDate;

/// Assigns a [`ComfortScore`] to days by combining the five criterion scores.
///
/// The result depends only on the total of the criterion scores and on how many
/// criteria scored zero, never on which criterion contributed what.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daycomfort::{ComfortClassifier, ComfortScore, CompleteDay};
///
/// let day = CompleteDay {
///     date: NaiveDate::from_ymd_opt(2017, 2, 20).unwrap(),
///     min_temperature: 18.0,
///     max_temperature: 26.0,
///     morning_temperature: 21.0,
///     afternoon_temperature: 24.0,
///     morning_dew_point: 12.0,
///     afternoon_dew_point: 15.0,
///     sunlight_percentage: 80.0,
///     rainfall: 0.0,
///     wind_gust: 20.0,
/// };
///
/// let classifier = ComfortClassifier::default();
/// assert_eq!(classifier.classify(&day), ComfortScore::Great);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComfortClassifier {
    thresholds: ComfortThresholds,
}

impl ComfortClassifier {
    pub fn new(thresholds: ComfortThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ComfortThresholds {
        &self.thresholds
    }

    pub fn criterion_scores(&self, day: &CompleteDay) -> CriterionScores {
        CriterionScores::evaluate(day, &self.thresholds)
    }

    /// Combines already computed criterion scores into a day level.
    pub fn classify_scores(&self, scores: &CriterionScores) -> ComfortScore {
        let rule = &self.thresholds.day_rule;
        let (total, zeros) = (scores.total(), scores.zero_count());

        let great = total > rule.great_total_above && zeros <= rule.great_max_zero_criteria;
        let good = total > rule.good_total_above && zeros <= rule.good_max_zero_criteria;

        match u8::from(great) + u8::from(good) {
            2 => ComfortScore::Great,
            1 => ComfortScore::Good,
            _ => ComfortScore::Bad,
        }
    }

    pub fn classify(&self, day: &CompleteDay) -> ComfortScore {
        self.classify_scores(&self.criterion_scores(day))
    }

    /// Classifies a derived record, or returns `None` if it still has gaps.
    pub fn classify_record(&self, record: &DerivedRecord) -> Option<ComfortScore> {
        record.complete().map(|day| self.classify(&day))
    }

    /// Classifies every day of a series, in date order.
    pub fn classify_series(&self, series: &CityTimeSeries) -> Vec<(NaiveDate, Option<ComfortScore>)> {
        series
            .records()
            .iter()
            .map(|record| (record.date(), self.classify_record(record)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::thresholds::DayRule;
    use crate::types::city::City;
    use crate::types::daily_record::DailyRecord;

    fn all_score_arrays() -> impl Iterator<Item = [u8; 5]> {
        (0..3u32.pow(5)).map(|mut n| {
            let mut scores = [0u8; 5];
            for slot in scores.iter_mut() {
                *slot = (n % 3) as u8;
                n /= 3;
            }
            scores
        })
    }

    #[test]
    fn test_day_rule_over_every_score_combination() {
        let classifier = ComfortClassifier::default();
        for raw in all_score_arrays() {
            let total: u8 = raw.iter().sum();
            let zeros = raw.iter().filter(|&&s| s == 0).count();
            let expected = if total > 8 && zeros == 0 {
                ComfortScore::Great
            } else if total > 4 && zeros <= 1 {
                ComfortScore::Good
            } else {
                ComfortScore::Bad
            };
            assert_eq!(
                classifier.classify_scores(&CriterionScores::from_array(raw).unwrap()),
                expected,
                "scores {raw:?}"
            );
        }
    }

    #[test]
    fn test_classification_ignores_criterion_order() {
        let classifier = ComfortClassifier::default();
        for raw in all_score_arrays() {
            let mut rotated = raw;
            rotated.rotate_left(2);
            let mut reversed = raw;
            reversed.reverse();

            let expected = classifier.classify_scores(&CriterionScores::from_array(raw).unwrap());
            assert_eq!(
                classifier.classify_scores(&CriterionScores::from_array(rotated).unwrap()),
                expected
            );
            assert_eq!(
                classifier.classify_scores(&CriterionScores::from_array(reversed).unwrap()),
                expected
            );
        }
    }

    #[test]
    fn test_alternate_day_rule() {
        let mut thresholds = ComfortThresholds::default();
        thresholds.day_rule = DayRule {
            great_total_above: 6,
            great_max_zero_criteria: 1,
            good_total_above: 2,
            good_max_zero_criteria: 2,
        };
        let lenient = ComfortClassifier::new(thresholds);
        let strict = ComfortClassifier::default();
        let scores = CriterionScores::from_array([2, 2, 2, 1, 0]).unwrap();

        assert_eq!(lenient.classify_scores(&scores), ComfortScore::Great);
        assert_eq!(strict.classify_scores(&scores), ComfortScore::Good);
    }

    #[test]
    fn test_incomplete_records_are_not_classified() {
        let date = NaiveDate::from_ymd_opt(2016, 7, 1).unwrap();
        let record = DerivedRecord {
            base: DailyRecord::empty(date),
            morning_dew_point: None,
            afternoon_dew_point: None,
            sunlight_percentage: None,
        };
        let series = CityTimeSeries::new(City::new("Adelaide", -34.9285), vec![record.clone()])
            .unwrap();

        let classifier = ComfortClassifier::default();
        assert_eq!(classifier.classify_record(&record), None);
        assert_eq!(classifier.classify_series(&series), vec![(date, None)]);
    }
}
