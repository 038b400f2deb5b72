//! Error types for resolving a location and fetching the weather.

use thiserror::Error;

/// Failures of the fetch and parse pipeline.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(
        "No OpenWeather API key configured.\n\
         Hint: run `weather configure` or set OPENWEATHER_API_KEY."
    )]
    MissingApiKey,

    #[error("Invalid weather endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Failed to send request to OpenWeather: {0}")]
    Network(#[source] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("OpenWeather returned malformed JSON: {0}")]
    MalformedJson(serde_json::Error),

    #[error("OpenWeather response did not match the expected schema: {0}")]
    SchemaMismatch(serde_json::Error),

    #[error("OpenWeather response contained no weather condition")]
    MissingCondition,
}

// The request URL carries the API key, so it never reaches the message.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.without_url())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => Self::SchemaMismatch(err),
            _ => Self::MalformedJson(err),
        }
    }
}

/// Failures of the location resolver.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation unavailable: {0}")]
    Unavailable(String),

    #[error("Zip code prompt was cancelled")]
    PromptCancelled,

    #[error("No zip code entered")]
    EmptyZip,

    #[error("Zip code prompt failed: {0}")]
    Prompt(String),
}

impl From<reqwest::Error> for LocationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.without_url().to_string())
    }
}
