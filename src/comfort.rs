//! Entry point tying the pipeline together: read each city's sheet, fill gaps,
//! derive indicators, cache, classify and count.

use crate::analyzer::aggregator;
use crate::analyzer::classifier::ComfortClassifier;
use crate::analyzer::thresholds::ComfortThresholds;
use crate::config::AnalysisConfig;
use crate::error::ComfortError;
use crate::parser::derived_metrics::derive_series;
use crate::parser::gap_filler::{FillReport, GapFiller};
use crate::parser::series_cache::SeriesCache;
use crate::parser::source_table::{load_city_sheet, sheet_path};
use crate::provider::weather_provider::WeatherProvider;
use crate::types::city_series::CityTimeSeries;
use crate::types::day_counts::DayCountSummary;
use bon::bon;
use log::{info, warn};

/// Series ready for classification.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub series: Vec<CityTimeSeries>,
    /// One report per city. Empty when the series came from the cache.
    pub fill_reports: Vec<FillReport>,
    pub from_cache: bool,
}

/// Result of [`ComfortAnalysis::run`].
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub summary: DayCountSummary,
    pub fill_reports: Vec<FillReport>,
    pub from_cache: bool,
}

/// Runs the comfort analysis over the configured cities.
///
/// Cities are processed one after another, and so are the provider requests
/// within a city.
///
/// # Examples
///
/// ```no_run
/// use daycomfort::{AnalysisConfig, ComfortAnalysis, ComfortError, ParquetSeriesCache, WorldWeatherOnline};
///
/// # async fn run() -> Result<(), ComfortError> {
/// let provider = WorldWeatherOnline::builder().api_key("my-key").build();
/// let cache = ParquetSeriesCache::in_default_dir().map_err(ComfortError::CacheDirResolution)?;
///
/// let analysis = ComfortAnalysis::builder()
///     .config(AnalysisConfig::default())
///     .provider(Box::new(provider))
///     .cache(Box::new(cache))
///     .build();
///
/// let outcome = analysis.run().await?;
/// println!("{}", outcome.summary);
/// # Ok(())
/// # }
/// ```
pub struct ComfortAnalysis {
    config: AnalysisConfig,
    provider: Box<dyn WeatherProvider>,
    cache: Box<dyn SeriesCache>,
    classifier: ComfortClassifier,
}

#[bon]
impl ComfortAnalysis {
    /// Creates an analysis. Without `thresholds` the default comfort limits apply.
    #[builder]
    pub fn new(
        #[builder(default)] config: AnalysisConfig,
        provider: Box<dyn WeatherProvider>,
        cache: Box<dyn SeriesCache>,
        thresholds: Option<ComfortThresholds>,
    ) -> Self {
        Self {
            config,
            provider,
            cache,
            classifier: ComfortClassifier::new(thresholds.unwrap_or_default()),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn classifier(&self) -> &ComfortClassifier {
        &self.classifier
    }

    /// Builds every city's series from its sheet and stores the result in the cache.
    ///
    /// # Errors
    ///
    /// Fails on the first city whose sheet is missing or malformed, or when the
    /// cache cannot be written. Provider failures only leave days unfilled.
    pub async fn parse_data(&self) -> Result<PreparedData, ComfortError> {
        let filler =
            GapFiller::new(self.provider.as_ref()).with_max_attempts(self.config.max_attempts);
        let mut series = Vec::with_capacity(self.config.cities.len());
        let mut fill_reports = Vec::with_capacity(self.config.cities.len());

        for city in &self.config.cities {
            let path = sheet_path(&self.config.input_dir, city);
            let mut records = load_city_sheet(&path, city, &self.config.date_format)?;
            let report = filler.fill(city, &mut records).await;
            series.push(derive_series(city.clone(), records)?);
            fill_reports.push(report);
        }

        self.cache.store(&series)?;
        Ok(PreparedData {
            series,
            fill_reports,
            from_cache: false,
        })
    }

    /// Loads the cached series if there are any, otherwise runs [`Self::parse_data`].
    pub async fn prepare(&self) -> Result<PreparedData, ComfortError> {
        if self.cache.exists() {
            let series = self.cache.load()?;
            info!("Loaded {} city series from cache", series.len());
            if !self.matches_configured_cities(&series) {
                warn!(
                    "Cached cities {:?} differ from configured cities {:?}; clear the cache to rebuild",
                    series.iter().map(|s| s.city().name.as_str()).collect::<Vec<_>>(),
                    self.config.cities.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
                );
            }
            return Ok(PreparedData {
                series,
                fill_reports: Vec::new(),
                from_cache: true,
            });
        }
        self.parse_data().await
    }

    /// Whether `series` holds exactly the configured cities, in configured order.
    pub fn matches_configured_cities(&self, series: &[CityTimeSeries]) -> bool {
        series
            .iter()
            .map(|s| s.city().name.as_str())
            .eq(self.config.cities.iter().map(|c| c.name.as_str()))
    }

    pub fn calc_day_counts(&self, series: &[CityTimeSeries]) -> DayCountSummary {
        aggregator::calc_day_counts(&self.classifier, series)
    }

    /// Prepares the data, counts the days and writes the summary to `config.summary_path`.
    pub async fn run(&self) -> Result<AnalysisOutcome, ComfortError> {
        let prepared = self.prepare().await?;
        let summary = self.calc_day_counts(&prepared.series);
        summary.save_csv(&self.config.summary_path)?;
        Ok(AnalysisOutcome {
            summary,
            fill_reports: prepared.fill_reports,
            from_cache: prepared.from_cache,
        })
    }
}
