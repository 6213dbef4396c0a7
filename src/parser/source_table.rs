//! Reads a city's raw daily sheet into [`DailyRecord`]s.
//!
//! Each city has its own sheet, exported as CSV with a header row. Only the date
//! column and the nine base-field columns are read; anything else is ignored.

use crate::parser::columns::{float_values, string_values};
use crate::parser::error::ParserError;
use crate::types::base_field::BaseField;
use crate::types::city::City;
use crate::types::daily_record::DailyRecord;
use chrono::NaiveDate;
use log::info;
use polars::prelude::*;
use std::path::{Path, PathBuf};

pub const DATE_COLUMN: &str = "Date";

/// Day-first, as the source sheets are written.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Location of the sheet of `city` inside `input_dir`.
pub fn sheet_path(input_dir: &Path, city: &City) -> PathBuf {
    input_dir.join(format!("{}.csv", city.name))
}

/// Loads the sheet at `path` for `city`.
///
/// # Errors
///
/// Fails fast with [`ParserError::MissingSheet`] if the file does not exist,
/// [`ParserError::MissingColumn`] if an expected header is absent, and
/// [`ParserError::InvalidDate`] / [`ParserError::DuplicateDate`] for bad date cells.
pub fn load_city_sheet(
    path: &Path,
    city: &City,
    date_format: &str,
) -> Result<Vec<DailyRecord>, ParserError> {
    if !path.is_file() {
        return Err(ParserError::MissingSheet {
            city: city.name.clone(),
            path: path.to_path_buf(),
        });
    }

    // Type inference reads every row: a column of whole numbers may turn decimal far down the sheet.
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| ParserError::SheetRead {
            city: city.name.clone(),
            source: e,
        })?
        .finish()
        .map_err(|e| ParserError::SheetRead {
            city: city.name.clone(),
            source: e,
        })?;

    let records = records_from_sheet(&df, &city.name, date_format)?;
    info!(
        "Read {} days for {} from {}",
        records.len(),
        city.name,
        path.display()
    );
    Ok(records)
}

/// Converts a loaded sheet into date-ordered records.
pub fn records_from_sheet(
    df: &DataFrame,
    city: &str,
    date_format: &str,
) -> Result<Vec<DailyRecord>, ParserError> {
    let date_cells = string_values(required_column(df, city, DATE_COLUMN)?).map_err(|e| {
        ParserError::ColumnType {
            city: city.to_string(),
            column: DATE_COLUMN.to_string(),
            source: e,
        }
    })?;

    let mut records = Vec::with_capacity(date_cells.len());
    for (row, cell) in date_cells.into_iter().enumerate() {
        let cell = cell.ok_or_else(|| ParserError::MissingDate {
            city: city.to_string(),
            row,
        })?;
        let date = NaiveDate::parse_from_str(cell.trim(), date_format).map_err(|_| {
            ParserError::InvalidDate {
                city: city.to_string(),
                value: cell.clone(),
                format: date_format.to_string(),
            }
        })?;
        records.push(DailyRecord::empty(date));
    }

    for field in BaseField::ALL {
        let header = field.source_header();
        let values = float_values(required_column(df, city, header)?).map_err(|e| {
            ParserError::ColumnType {
                city: city.to_string(),
                column: header.to_string(),
                source: e,
            }
        })?;
        for (record, value) in records.iter_mut().zip(values) {
            record.set(field, value);
        }
    }

    records.sort_by_key(|r| r.date);
    if let Some(pair) = records.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(ParserError::DuplicateDate {
            city: city.to_string(),
            date: pair[0].date,
        });
    }
    Ok(records)
}

fn required_column<'a>(
    df: &'a DataFrame,
    city: &str,
    name: &str,
) -> Result<&'a Column, ParserError> {
    df.column(name).map_err(|_| ParserError::MissingColumn {
        city: city.to_string(),
        column: name.to_string(),
    })
}
