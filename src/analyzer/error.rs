use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("I/O error writing day count summary '{0}'")]
    SummaryWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing day count summary '{0}'")]
    SummaryWritePolars(PathBuf, #[source] PolarsError),

    #[error("Failed to read day count summary '{0}'")]
    SummaryRead(PathBuf, #[source] PolarsError),

    #[error("Day count summary '{path}' is malformed: {message}")]
    SummaryMalformed { path: PathBuf, message: String },

    #[error("Failed building day count frame")]
    FrameBuild(#[source] PolarsError),
}
