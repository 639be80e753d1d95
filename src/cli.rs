//! Command-line interface parsing for inkweather
//!
//! Flags override the values loaded from the settings file. The result is a
//! [`StartupConfig`] that `main` hands to the refresh task and the app.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::config::{validate_coordinates, ConfigError, Settings};
use crate::data::ForecastSource;
use crate::forecast::AssemblerConfig;
use crate::refresh::RefreshConfig;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// Coordinates outside the valid range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Refresh interval of zero minutes
    #[error("Invalid interval: must be at least 1 minute")]
    InvalidInterval,

    /// `--input` points to a missing file
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

/// inkweather - current weather, three hours and four days at a glance
#[derive(Parser, Debug)]
#[command(name = "inkweather")]
#[command(about = "Weather forecast display for the terminal, powered by Open-Meteo")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long, env = "INKWEATHER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Latitude of the location, overrides the settings file
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude of the location, overrides the settings file
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Minutes between updates, overrides the settings file
    #[arg(long, value_name = "MIN")]
    pub interval: Option<u64>,

    /// Read the forecast from a saved Open-Meteo response instead of the API
    ///
    /// Examples:
    ///   inkweather --input forecast.json           # Show a saved forecast
    ///   inkweather --input forecast.json --once    # Print it as JSON
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Run one update, print the snapshot as JSON and exit
    #[arg(long)]
    pub once: bool,

    /// Log level filter (e.g. "debug", "inkweather=trace")
    #[arg(long, env = "INKWEATHER_LOG", value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Configuration derived from settings and CLI arguments for startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Where payloads are loaded from
    pub source: ForecastSource,
    /// Refresh task configuration
    pub refresh: RefreshConfig,
    /// Assembler configuration
    pub assembler: AssemblerConfig,
    /// Single update mode
    pub once: bool,
    /// Effective log level filter
    pub log_level: String,
}

impl StartupConfig {
    /// Merges parsed CLI arguments over loaded settings
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    /// * `settings` - Settings loaded from file or defaults
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with the effective values
    /// * `Err(CliError)` if a flag value is out of range
    pub fn from_cli(cli: &Cli, settings: &Settings) -> Result<Self, CliError> {
        let latitude = cli.latitude.unwrap_or(settings.location.latitude);
        let longitude = cli.longitude.unwrap_or(settings.location.longitude);
        validate_coordinates(latitude, longitude).map_err(|e| match e {
            ConfigError::Invalid(message) => CliError::InvalidCoordinates(message),
            other => CliError::InvalidCoordinates(other.to_string()),
        })?;

        let interval_minutes = cli.interval.unwrap_or(settings.refresh.interval_minutes);
        if interval_minutes == 0 {
            return Err(CliError::InvalidInterval);
        }

        let source = match &cli.input {
            Some(path) if !path.exists() => return Err(CliError::InputNotFound(path.clone())),
            Some(path) => ForecastSource::File(path.clone()),
            None => ForecastSource::open_meteo(latitude, longitude),
        };

        Ok(StartupConfig {
            source,
            refresh: RefreshConfig {
                interval: Duration::from_secs(interval_minutes * 60),
                enabled: true,
            },
            assembler: AssemblerConfig {
                hour_labels: settings.forecast.hour_labels,
            },
            once: cli.once,
            log_level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| settings.logging.level.clone()),
        })
    }
}
