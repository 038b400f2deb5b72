use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::convert::{kelvin_to_celsius, kelvin_to_fahrenheit};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where to ask the weather for: a position or a postal code.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coordinates(Coordinates),
    Zip(String),
}

impl Location {
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self::Coordinates(Coordinates { latitude, longitude })
    }

    pub fn zip(code: impl Into<String>) -> Self {
        Self::Zip(code.into())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Coordinates(c) => write!(f, "{}, {}", c.latitude, c.longitude),
            Location::Zip(code) => write!(f, "zip {code}"),
        }
    }
}

/// Unit the temperature is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius]
    }

    /// Convert an absolute temperature to this unit, rounded to whole degrees.
    pub fn convert_kelvin(&self, kelvin: f64) -> i64 {
        match self {
            TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
            TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: fahrenheit, celsius."
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub location: Location,
    pub unit: TemperatureUnit,
}

/// Current conditions, already converted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub code: u32,
    pub humidity: u8,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub location: String,
    pub temperature: i64,
    pub unit: TemperatureUnit,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherRecord {
    /// Icon asset for the condition code.
    pub fn icon_path(&self) -> String {
        format!("imgs/codes/{}.png", self.code)
    }
}
