use crate::{
    Config, WeatherRecord, WeatherRequest, error::WeatherError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherRecord, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// `OPENWEATHER_API_KEY` wins over the key stored in the config file.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.resolved_api_key().ok_or(WeatherError::MissingApiKey)?;

    let boxed: Box<dyn WeatherProvider> = Box::new(OpenWeatherProvider::with_endpoint(
        api_key,
        config.endpoint.clone(),
    ));

    Ok(boxed)
}
