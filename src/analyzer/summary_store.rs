//! CSV persistence of a [`DayCountSummary`].
//!
//! Layout: a `Day` column holding the level labels (best first), then one count
//! column per city in summary order. Excluded days are not written.

use crate::analyzer::error::AnalyzerError;
use crate::parser::columns::{count_values, string_values};
use crate::types::comfort_score::ComfortScore;
use crate::types::day_counts::{DayCountSummary, DayCounts};
use log::info;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

pub const DAY_COLUMN: &str = "Day";

impl DayCountSummary {
    pub fn to_frame(&self) -> Result<DataFrame, AnalyzerError> {
        let labels: Vec<&str> = ComfortScore::BEST_FIRST
            .iter()
            .map(|score| score.label())
            .collect();
        let mut columns = vec![Column::new(DAY_COLUMN.into(), labels)];
        for (city, counts) in self.iter() {
            let values: Vec<u64> = ComfortScore::BEST_FIRST
                .iter()
                .map(|&score| counts.get(score) as u64)
                .collect();
            columns.push(Column::new(city.into(), values));
        }
        DataFrame::new(columns).map_err(AnalyzerError::FrameBuild)
    }

    /// Writes the summary as CSV, creating the parent directory if needed.
    pub fn save_csv(&self, path: &Path) -> Result<(), AnalyzerError> {
        let mut df = self.to_frame()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AnalyzerError::SummaryWriteIo(path.to_path_buf(), e))?;
        }
        let mut file =
            File::create(path).map_err(|e| AnalyzerError::SummaryWriteIo(path.to_path_buf(), e))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| AnalyzerError::SummaryWritePolars(path.to_path_buf(), e))?;

        info!(
            "Wrote day counts for {} cities to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads a summary written by [`DayCountSummary::save_csv`].
    ///
    /// Rows may appear in any order; each level label must appear exactly once.
    pub fn load_csv(path: &Path) -> Result<Self, AnalyzerError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| AnalyzerError::SummaryRead(path.to_path_buf(), e))?
            .finish()
            .map_err(|e| AnalyzerError::SummaryRead(path.to_path_buf(), e))?;
        Self::from_frame(&df, path)
    }

    pub(crate) fn from_frame(df: &DataFrame, path: &Path) -> Result<Self, AnalyzerError> {
        let malformed = |message: String| AnalyzerError::SummaryMalformed {
            path: path.to_path_buf(),
            message,
        };

        let label_column = df
            .column(DAY_COLUMN)
            .map_err(|_| malformed(format!("missing '{DAY_COLUMN}' column")))?;
        let labels = string_values(label_column).map_err(|e| malformed(e.to_string()))?;

        let mut row_of = [None; 3];
        for (row, label) in labels.iter().enumerate() {
            let label = label.as_deref().unwrap_or_default();
            let score = ComfortScore::from_label(label)
                .ok_or_else(|| malformed(format!("unknown row label '{label}'")))?;
            let slot = &mut row_of[score.level() as usize];
            if slot.replace(row).is_some() {
                return Err(malformed(format!("row '{label}' appears twice")));
            }
        }
        let [bad_row, good_row, great_row] = row_of;
        let (Some(bad_row), Some(good_row), Some(great_row)) = (bad_row, good_row, great_row)
        else {
            return Err(malformed("expected one row per comfort level".to_string()));
        };

        let mut summary = DayCountSummary::new();
        for column in df.get_columns() {
            let city = column.name().as_str();
            if city == DAY_COLUMN {
                continue;
            }
            let values = count_values(column).map_err(|e| malformed(e.to_string()))?;
            let cell = |row: usize| {
                values
                    .get(row)
                    .copied()
                    .flatten()
                    .map(|v| v as usize)
                    .ok_or_else(|| malformed(format!("invalid count for '{city}'")))
            };
            summary.insert(
                city,
                DayCounts {
                    great: cell(great_row)?,
                    good: cell(good_row)?,
                    bad: cell(bad_row)?,
                    excluded: 0,
                },
            );
        }
        Ok(summary)
    }
}
