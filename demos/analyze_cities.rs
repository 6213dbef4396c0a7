//! Runs the full analysis for the configured cities and prints the day counts.
//!
//! Usage: `cargo run --example analyze_cities -- [config.json]`
//! The provider key comes from the config file or the `WWO_API_KEY` variable.

use daycomfort::{
    AnalysisConfig, ComfortAnalysis, ComfortError, FillStatus, ParquetSeriesCache,
    WorldWeatherOnline,
};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), ComfortError> {
    pretty_env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => AnalysisConfig::from_json_file(Path::new(&path))?,
        None => AnalysisConfig::default(),
    };
    let api_key = config
        .wwo_api_key
        .clone()
        .or_else(|| std::env::var("WWO_API_KEY").ok())
        .unwrap_or_default();

    let provider = WorldWeatherOnline::builder().api_key(api_key).build();
    let cache = ParquetSeriesCache::in_default_dir().map_err(ComfortError::CacheDirResolution)?;
    println!("Series cache: {}", cache.path().display());

    let analysis = ComfortAnalysis::builder()
        .config(config)
        .provider(Box::new(provider))
        .cache(Box::new(cache))
        .build();

    let outcome = analysis.run().await?;

    for report in &outcome.fill_reports {
        for day in &report.days {
            if let FillStatus::Failed { attempts } = day.status {
                println!(
                    "{}: no replacement for {} after {} attempts",
                    report.city, day.date, attempts
                );
            }
        }
    }
    println!("{}", outcome.summary);
    println!(
        "Summary written to {}",
        analysis.config().summary_path.display()
    );
    Ok(())
}
