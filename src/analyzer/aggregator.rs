//! Tallies classified days per city.

use crate::analyzer::classifier::ComfortClassifier;
use crate::types::city_series::CityTimeSeries;
use crate::types::day_counts::{DayCounts, DayCountSummary};
use log::{debug, info};

/// Counts the comfort levels of one city's series.
pub fn count_days(classifier: &ComfortClassifier, series: &CityTimeSeries) -> DayCounts {
    let mut counts = DayCounts::default();
    for record in series.records() {
        counts.record(classifier.classify_record(record));
    }
    counts
}

/// Counts the comfort levels of every city, keeping the order of `series`.
///
/// Days that still have missing values are left out of the three levels and
/// reported as `excluded`.
pub fn calc_day_counts(classifier: &ComfortClassifier, series: &[CityTimeSeries]) -> DayCountSummary {
    let mut summary = DayCountSummary::new();
    for city_series in series {
        let name = &city_series.city().name;
        let counts = count_days(classifier, city_series);
        if counts.excluded > 0 {
            info!(
                "{} of {} days for {} are incomplete and were not classified",
                counts.excluded,
                city_series.len(),
                name
            );
        }
        debug!("Day counts for {}: {:?}", name, counts);
        summary.insert(name.clone(), counts);
    }
    summary
}
