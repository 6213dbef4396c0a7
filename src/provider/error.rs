use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode weather response for {url}")]
    ResponseDecode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse weather JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Provider rejected the request: {0}")]
    Rejected(String),

    #[error("No daily weather returned for {city} on {date}")]
    NoWeatherData { city: String, date: String },

    #[error("No hourly reading at {time} in the weather response")]
    MissingReading { time: String },

    #[error("Field '{field}' holds non-numeric value '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
