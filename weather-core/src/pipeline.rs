//! Fetch, convert and render in one step.

use tracing::info;

use crate::{
    Config,
    error::WeatherError,
    model::{Location, TemperatureUnit, WeatherRecord, WeatherRequest},
    provider::{WeatherProvider, provider_from_config},
    render::{PresentationTarget, render},
};

/// Everything an update needs, built once at startup.
#[derive(Debug)]
pub struct Pipeline {
    provider: Box<dyn WeatherProvider>,
    unit: TemperatureUnit,
}

impl Pipeline {
    pub fn new(provider: Box<dyn WeatherProvider>, unit: TemperatureUnit) -> Self {
        Self { provider, unit }
    }

    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        Ok(Self::new(provider_from_config(config)?, config.units))
    }

    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Fetch the weather for `location` and render it into `target`.
    ///
    /// The target is only written once a complete record is available; on error it is
    /// left as it was.
    pub async fn update(
        &self,
        location: Location,
        target: &mut dyn PresentationTarget,
    ) -> Result<WeatherRecord, WeatherError> {
        let request = WeatherRequest { location, unit: self.unit };
        let record = self.provider.get_weather(&request).await?;

        render(&record, target);
        info!(location = %record.location, code = record.code, "weather updated");

        Ok(record)
    }
}
