//! Persistence of fully derived city series, so later runs can skip reading,
//! filling and deriving.
//!
//! The cache is a capability handed to [`crate::ComfortAnalysis`]; the pipeline asks
//! it whether a stored copy exists instead of probing the filesystem itself.

use crate::parser::columns::{float_values, string_values};
use crate::parser::error::ParserError;
use crate::types::base_field::BaseField;
use crate::types::city::City;
use crate::types::city_series::CityTimeSeries;
use crate::types::daily_record::DailyRecord;
use crate::types::derived_record::DerivedRecord;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use chrono::NaiveDate;
use log::info;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

const CITY_COLUMN: &str = "city";
const LATITUDE_COLUMN: &str = "latitude";
const DATE_COLUMN: &str = "date";
const MORNING_DEW_COLUMN: &str = "dew_9";
const AFTERNOON_DEW_COLUMN: &str = "dew_3";
const SUNLIGHT_PERCENTAGE_COLUMN: &str = "sun_perc";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage for derived city series.
///
/// A cached copy is a convenience, never the source of truth: it can always be
/// rebuilt from the source sheets.
pub trait SeriesCache: Send + Sync {
    /// Whether a stored copy is available to [`SeriesCache::load`].
    fn exists(&self) -> bool;

    /// Loads every stored series, in the order they were stored.
    fn load(&self) -> Result<Vec<CityTimeSeries>, ParserError>;

    /// Replaces the stored copy with `series`.
    fn store(&self, series: &[CityTimeSeries]) -> Result<(), ParserError>;
}

/// Keeps all cities in a single parquet file, one row per city and day.
pub struct ParquetSeriesCache {
    path: PathBuf,
}

impl ParquetSeriesCache {
    pub const DEFAULT_FILE_NAME: &'static str = "updated_meteo_data.parquet";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A cache file inside the platform cache directory (e.g. `~/.cache/daycomfort_cache` on Linux).
    pub fn in_default_dir() -> std::io::Result<Self> {
        Ok(Self::new(get_cache_dir()?.join(Self::DEFAULT_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl SeriesCache for ParquetSeriesCache {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<Vec<CityTimeSeries>, ParserError> {
        let df = LazyFrame::scan_parquet(&self.path, Default::default())
            .and_then(|lf| lf.collect())
            .map_err(|e| ParserError::CacheScan(self.path.clone(), e))?;
        let series = series_from_frame(&df, &self.path)?;
        info!(
            "Loaded {} cached series from {}",
            series.len(),
            self.path.display()
        );
        Ok(series)
    }

    fn store(&self, series: &[CityTimeSeries]) -> Result<(), ParserError> {
        let mut df = series_to_frame(series)?;
        let directory = self.directory();
        ensure_cache_dir_exists(directory)
            .map_err(|e| ParserError::CacheDirCreation(directory.to_path_buf(), e))?;

        // Write next to the target and rename, so a failed write never leaves a
        // truncated cache behind for `exists` to pick up.
        let mut temp_file = NamedTempFile::new_in(directory)
            .map_err(|e| ParserError::CacheWriteIo(self.path.clone(), e))?;
        ParquetWriter::new(temp_file.as_file_mut())
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut df)
            .map_err(|e| ParserError::CacheWritePolars(self.path.clone(), e))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| ParserError::CacheWriteIo(self.path.clone(), e.error))?;

        info!(
            "Cached {} rows for {} cities to {}",
            df.height(),
            series.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Holds series in process memory. Useful for tests and for runs that must not touch disk.
#[derive(Default)]
pub struct MemorySeriesCache {
    stored: Mutex<Option<Vec<CityTimeSeries>>>,
}

impl MemorySeriesCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeriesCache for MemorySeriesCache {
    fn exists(&self) -> bool {
        self.stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    fn load(&self) -> Result<Vec<CityTimeSeries>, ParserError> {
        self.stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .ok_or_else(|| ParserError::CacheMiss("memory".to_string()))
    }

    fn store(&self, series: &[CityTimeSeries]) -> Result<(), ParserError> {
        *self
            .stored
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(series.to_vec());
        Ok(())
    }
}

/// Flattens series into one frame: `city, latitude, date`, the nine base fields, then the derived indicators.
///
/// A city without days is written as a single row with a null date, so it is not
/// lost on reload.
pub fn series_to_frame(series: &[CityTimeSeries]) -> Result<DataFrame, ParserError> {
    let rows: Vec<(&City, Option<&DerivedRecord>)> = series
        .iter()
        .flat_map(|s| {
            let records: Vec<Option<&DerivedRecord>> = if s.is_empty() {
                vec![None]
            } else {
                s.records().iter().map(Some).collect()
            };
            records.into_iter().map(move |r| (s.city(), r))
        })
        .collect();

    let cities: Vec<String> = rows.iter().map(|(c, _)| c.name.clone()).collect();
    let latitudes: Vec<f64> = rows.iter().map(|(c, _)| c.latitude).collect();
    let dates: Vec<Option<String>> = rows
        .iter()
        .map(|(_, r)| r.map(|r| r.date().format(DATE_FORMAT).to_string()))
        .collect();
    let morning_dew: Vec<Option<f64>> = rows
        .iter()
        .map(|(_, r)| r.and_then(|r| r.morning_dew_point))
        .collect();
    let afternoon_dew: Vec<Option<f64>> = rows
        .iter()
        .map(|(_, r)| r.and_then(|r| r.afternoon_dew_point))
        .collect();
    let sunlight_percentage: Vec<Option<f64>> = rows
        .iter()
        .map(|(_, r)| r.and_then(|r| r.sunlight_percentage))
        .collect();

    let mut columns = vec![
        Column::new(CITY_COLUMN.into(), cities),
        Column::new(LATITUDE_COLUMN.into(), latitudes),
        Column::new(DATE_COLUMN.into(), dates),
    ];
    for field in BaseField::ALL {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|(_, r)| r.and_then(|r| r.base.get(field)))
            .collect();
        columns.push(Column::new(field.column_name().into(), values));
    }
    columns.push(Column::new(MORNING_DEW_COLUMN.into(), morning_dew));
    columns.push(Column::new(AFTERNOON_DEW_COLUMN.into(), afternoon_dew));
    columns.push(Column::new(
        SUNLIGHT_PERCENTAGE_COLUMN.into(),
        sunlight_percentage,
    ));

    DataFrame::new(columns).map_err(ParserError::FrameBuild)
}

/// Rebuilds series from a frame written by [`series_to_frame`], keeping cities in
/// order of first appearance.
pub fn series_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<CityTimeSeries>, ParserError> {
    let malformed = |message: String| ParserError::CacheMalformed {
        path: path.to_path_buf(),
        message,
    };
    let column = |name: &str| {
        df.column(name)
            .map_err(|_| malformed(format!("missing column '{name}'")))
    };
    let floats = |name: &str| {
        column(name).and_then(|c| {
            float_values(c).map_err(|e| malformed(format!("column '{name}': {e}")))
        })
    };

    let cities = column(CITY_COLUMN)
        .and_then(|c| string_values(c).map_err(|e| malformed(e.to_string())))?;
    let dates = column(DATE_COLUMN)
        .and_then(|c| string_values(c).map_err(|e| malformed(e.to_string())))?;
    let latitudes = floats(LATITUDE_COLUMN)?;
    let mut base_values = Vec::with_capacity(BaseField::ALL.len());
    for field in BaseField::ALL {
        base_values.push((field, floats(field.column_name())?));
    }
    let morning_dew = floats(MORNING_DEW_COLUMN)?;
    let afternoon_dew = floats(AFTERNOON_DEW_COLUMN)?;
    let sunlight_percentage = floats(SUNLIGHT_PERCENTAGE_COLUMN)?;

    let mut grouped: Vec<(City, Vec<DerivedRecord>)> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for row in 0..df.height() {
        let name = cities[row]
            .clone()
            .ok_or_else(|| malformed(format!("row {row} has no city")))?;
        let latitude =
            latitudes[row].ok_or_else(|| malformed(format!("row {row} has no latitude")))?;
        let slot = match index_of.get(&name) {
            Some(&i) => i,
            None => {
                index_of.insert(name.clone(), grouped.len());
                grouped.push((City::new(name, latitude), Vec::new()));
                grouped.len() - 1
            }
        };
        // Placeholder row of a city without days.
        let Some(date_cell) = dates[row].as_deref() else {
            continue;
        };
        let date = NaiveDate::parse_from_str(date_cell, DATE_FORMAT)
            .map_err(|_| malformed(format!("row {row} has unparsable date '{date_cell}'")))?;

        let mut base = DailyRecord::empty(date);
        for (field, values) in &base_values {
            base.set(*field, values[row]);
        }
        let record = DerivedRecord {
            base,
            morning_dew_point: morning_dew[row],
            afternoon_dew_point: afternoon_dew[row],
            sunlight_percentage: sunlight_percentage[row],
        };

        grouped[slot].1.push(record);
    }

    grouped
        .into_iter()
        .map(|(city, records)| CityTimeSeries::new(city, records))
        .collect()
}
