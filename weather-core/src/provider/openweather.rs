use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{
    convert::degrees_to_direction,
    error::WeatherError,
    model::{Location, TemperatureUnit, WeatherRecord, WeatherRequest},
};

use super::WeatherProvider;

pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherRecord, WeatherError> {
        let url = build_url(&self.endpoint, &request.location, &self.api_key)?;
        debug!(location = %request.location, endpoint = %self.endpoint, "requesting current weather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let record = parse_current(&body, request.unit)?;
        debug!(code = record.code, location = %record.location, "parsed current weather");

        Ok(record)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherRecord, WeatherError> {
        self.fetch_current(request).await
    }
}

/// Build the current-weather URL for a location.
///
/// Coordinates become `lat`/`lon`, a postal code becomes `zip`; the key is always sent as
/// `APPID`. The descriptor is not validated.
pub fn build_url(endpoint: &str, location: &Location, api_key: &str) -> Result<Url, WeatherError> {
    let mut url = Url::parse(endpoint)?;

    {
        let mut query = url.query_pairs_mut();
        match location {
            Location::Coordinates(c) => {
                query
                    .append_pair("lat", &c.latitude.to_string())
                    .append_pair("lon", &c.longitude.to_string());
            }
            Location::Zip(code) => {
                query.append_pair("zip", code);
            }
        }
        query.append_pair("APPID", api_key);
    }

    Ok(url)
}

/// Decode a current-weather body into a display-ready record.
pub fn parse_current(body: &str, unit: TemperatureUnit) -> Result<WeatherRecord, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let code = parsed
        .weather
        .first()
        .map(|w| w.id)
        .ok_or(WeatherError::MissingCondition)?;

    Ok(WeatherRecord {
        code,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        wind_direction: degrees_to_direction(parsed.wind.deg).to_string(),
        location: parsed.name,
        temperature: unit.convert_kelvin(parsed.main.temp),
        unit,
        observed_at: parsed.dt.and_then(unix_to_utc),
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
