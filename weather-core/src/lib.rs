//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Location resolution (geolocation with a zip code fallback)
//! - The OpenWeather current-weather provider
//! - Unit conversions and rendering into presentation slots
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod convert;
pub mod error;
pub mod location;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod render;

pub use config::Config;
pub use error::{LocationError, WeatherError};
pub use location::{Geolocator, IpGeolocator, ZipPrompt, resolve_location};
pub use model::{Coordinates, Location, TemperatureUnit, WeatherRecord, WeatherRequest};
pub use pipeline::Pipeline;
pub use provider::WeatherProvider;
pub use render::{Panel, PresentationTarget, Slot, render};
