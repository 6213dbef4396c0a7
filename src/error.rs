use crate::analyzer::error::AnalyzerError;
use crate::parser::error::ParserError;
use crate::provider::error::ProviderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComfortError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    #[error("Failed to read configuration file '{0}'")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse configuration file '{0}'")]
    ConfigParse(PathBuf, #[source] serde_json::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution(#[source] std::io::Error),
}
