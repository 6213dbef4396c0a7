mod analyzer;
mod comfort;
mod config;
mod error;
mod parser;
mod provider;
mod types;
mod utils;

pub use comfort::*;
pub use config::AnalysisConfig;
pub use error::ComfortError;

pub use types::base_field::BaseField;
pub use types::city::{default_cities, City};
pub use types::city_series::CityTimeSeries;
pub use types::comfort_score::ComfortScore;
pub use types::daily_record::DailyRecord;
pub use types::day_counts::{DayCountSummary, DayCounts};
pub use types::derived_record::{CompleteDay, DerivedRecord};
pub use types::weather_record::WeatherRecord;

pub use provider::retry::{fetch_with_retry, FetchOutcome, DEFAULT_MAX_ATTEMPTS};
pub use provider::weather_provider::WeatherProvider;
pub use provider::world_weather_online::*;

pub use parser::derived_metrics::*;
pub use parser::gap_filler::*;
pub use parser::series_cache::*;
pub use parser::source_table::*;

pub use analyzer::aggregator::{calc_day_counts, count_days};
pub use analyzer::classifier::ComfortClassifier;
pub use analyzer::criteria::*;
pub use analyzer::summary_store::DAY_COLUMN;
pub use analyzer::thresholds::*;

pub use analyzer::error::AnalyzerError;
pub use parser::error::ParserError;
pub use provider::error::ProviderError;
