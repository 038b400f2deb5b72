use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use tracing::debug;
use weather_core::{
    Config, Geolocator, IpGeolocator, Location, Panel, Pipeline, TemperatureUnit,
    resolve_location,
};

use crate::prompt::TerminalZipPrompt;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for where you are")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred units.
    Configure,

    /// Show current weather. Without a location, geolocates or asks for a zip code.
    Show {
        /// Latitude in decimal degrees.
        #[arg(long, requires = "lon", conflicts_with = "zip", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees.
        #[arg(long, requires = "lat", conflicts_with = "zip", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Postal code, optionally with a country suffix like "10001,us".
        #[arg(long)]
        zip: Option<String>,

        /// Display units: fahrenheit or celsius. Defaults to the configured units.
        #[arg(long)]
        units: Option<TemperatureUnit>,

        /// Skip geolocation and ask for a zip code straight away.
        #[arg(long)]
        no_geolocate: bool,

        /// Print the weather record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the config file in use.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => Config::config_file_path()?,
        };

        match self.command {
            Command::Configure => configure(&config_path)?,
            Command::Show { lat, lon, zip, units, no_geolocate, json } => {
                let config = Config::load_from(&config_path)?;

                let mut pipeline = Pipeline::from_config(&config)?;
                if let Some(unit) = units {
                    pipeline = pipeline.with_unit(unit);
                }

                let location = match (lat, lon, zip) {
                    (Some(lat), Some(lon), _) => {
                        debug!(lat, lon, "location given on the command line");
                        Location::coordinates(lat, lon)
                    }
                    (_, _, Some(zip)) => {
                        debug!(zip = %zip, "location given on the command line");
                        Location::zip(zip)
                    }
                    _ => {
                        let geo = IpGeolocator::new(config.geolocation_endpoint.clone());
                        let geolocator = if no_geolocate {
                            None
                        } else {
                            Some(&geo as &dyn Geolocator)
                        };

                        resolve_location(geolocator, &TerminalZipPrompt)
                            .await
                            .context("Could not determine a location")?
                    }
                };

                let mut panel = Panel::new();
                let record = pipeline.update(location, &mut panel).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                } else {
                    println!("{panel}");
                    if let Some(at) = record.observed_at {
                        println!("  Observed:    {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
                    }
                }
            }
            Command::ConfigPath => println!("{}", config_path.display()),
        }

        Ok(())
    }
}

fn configure(path: &Path) -> anyhow::Result<()> {
    let mut config = Config::load_from(path)?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("API key prompt failed")?;
    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    config.set_api_key(api_key.to_string());

    let units = TemperatureUnit::all().to_vec();
    let current = units.iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Temperature units:", units)
        .with_starting_cursor(current)
        .prompt()
        .context("Units prompt failed")?;

    config.save_to(path)?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
