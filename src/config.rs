//! Run configuration, loadable from a JSON file.

use crate::error::ComfortError;
use crate::parser::source_table::DEFAULT_DATE_FORMAT;
use crate::provider::retry::DEFAULT_MAX_ATTEMPTS;
use crate::types::city::{default_cities, City};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of one analysis run. Every field has a default, so a partial JSON
/// file (or `{}`) is a valid configuration.
///
/// # Examples
///
/// ```
/// use daycomfort::AnalysisConfig;
///
/// let config: AnalysisConfig = serde_json::from_str(r#"{ "max_attempts": 5 }"#).unwrap();
/// assert_eq!(config.max_attempts, 5);
/// assert_eq!(config.cities.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Cities to analyse, in output order.
    pub cities: Vec<City>,
    /// Directory holding one `<City>.csv` sheet per city.
    pub input_dir: PathBuf,
    /// Where the day count summary is written.
    pub summary_path: PathBuf,
    /// Provider attempts per incomplete day.
    pub max_attempts: u32,
    /// `chrono` format of the sheet date column.
    pub date_format: String,
    pub wwo_api_key: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cities: default_cities(),
            input_dir: PathBuf::from("data"),
            summary_path: PathBuf::from("data/day_counts.csv"),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            wwo_api_key: None,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ComfortError> {
        let text =
            fs::read_to_string(path).map_err(|e| ComfortError::ConfigRead(path.to_path_buf(), e))?;
        serde_json::from_str(&text).map_err(|e| ComfortError::ConfigParse(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(
            config.cities.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Melbourne", "Sydney", "Adelaide", "Brisbane", "Perth"]
        );
    }

    #[test]
    fn test_from_json_file_overrides_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "cities": [{{ "name": "Darwin", "latitude": -12.4634 }}],
                "input_dir": "sheets",
                "wwo_api_key": "abc123"
            }}"#
        )
        .unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.cities, vec![City::new("Darwin", -12.4634)]);
        assert_eq!(config.input_dir, PathBuf::from("sheets"));
        assert_eq!(config.wwo_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.summary_path, PathBuf::from("data/day_counts.csv"));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = AnalysisConfig::from_json_file(file.path());
        assert!(matches!(result, Err(ComfortError::ConfigParse(..))));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AnalysisConfig::from_json_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ComfortError::ConfigRead(..))));
    }
}
