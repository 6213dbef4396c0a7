use chrono::NaiveDate;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("No source sheet for city '{city}' at '{path}'")]
    MissingSheet { city: String, path: PathBuf },

    #[error("Failed to read source sheet for city '{city}'")]
    SheetRead {
        city: String,
        #[source]
        source: PolarsError,
    },

    #[error("Source sheet for city '{city}' has no column '{column}'")]
    MissingColumn { city: String, column: String },

    #[error("Column '{column}' of the sheet for city '{city}' is not numeric")]
    ColumnType {
        city: String,
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Row {row} of the sheet for city '{city}' has no date")]
    MissingDate { city: String, row: usize },

    #[error("Unparsable date '{value}' in the sheet for city '{city}' (expected format {format})")]
    InvalidDate {
        city: String,
        value: String,
        format: String,
    },

    #[error("Date {date} appears more than once in the series for city '{city}'")]
    DuplicateDate { city: String, date: NaiveDate },

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("I/O error writing series cache '{0}'")]
    CacheWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing series cache '{0}'")]
    CacheWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed to scan series cache '{0}'")]
    CacheScan(PathBuf, #[source] PolarsError),

    #[error("Series cache '{path}' is malformed: {message}")]
    CacheMalformed { path: PathBuf, message: String },

    #[error("Failed building series frame")]
    FrameBuild(#[source] PolarsError),

    #[error("No cached series available in {0}")]
    CacheMiss(String),
}
