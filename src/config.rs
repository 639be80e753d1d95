//! Settings file loading
//!
//! Settings come from a TOML file, searched in priority order:
//! 1. Explicit path (`--config` or `INKWEATHER_CONFIG`)
//! 2. XDG config home (`~/.config/inkweather/config.toml` on Linux)
//! 3. Built-in defaults
//!
//! Every section and key is optional; missing keys keep their defaults.
//! CLI flags are merged on top in [`crate::cli`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::forecast::HourLabelStyle;

/// Application name used for the config and data directories
pub const APP_NAME: &str = "inkweather";

/// Settings file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has wrongly typed values
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Describes where the settings were loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Explicit path provided via CLI or env var
    Explicit(PathBuf),
    /// Found in the XDG config directory
    XdgConfig(PathBuf),
    /// No config file found, using defaults
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{}", p.display()),
            ConfigSource::XdgConfig(p) => write!(f, "{}", p.display()),
            ConfigSource::Defaults => write!(f, "(defaults)"),
        }
    }
}

/// Location the forecast is requested for
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        // Berlin
        Self {
            latitude: 52.5244,
            longitude: 13.4105,
        }
    }
}

/// Refresh scheduling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    /// Minutes between updates
    pub interval_minutes: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_minutes: 15,
        }
    }
}

/// Forecast assembly options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    /// `"wrapped"` (default) or `"raw"`
    pub hour_labels: HourLabelStyle,
}

/// Localizable labels used by the renderer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiLabels {
    /// Weekday names, Monday first
    pub days: Vec<String>,
    /// Month names, January first
    pub months: Vec<String>,
    /// Footer prefix in front of the update timestamp
    pub footer: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        let to_strings = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            days: to_strings(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            months: to_strings(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            footer: "Updated".to_string(),
        }
    }
}

impl UiLabels {
    /// Weekday name for 0 = Monday .. 6 = Sunday
    pub fn day_name(&self, weekday: u32) -> &str {
        self.days
            .get(weekday as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// Month name for a two-digit month string such as "06"
    pub fn month_name<'a>(&'a self, month: &'a str) -> &'a str {
        month
            .parse::<usize>()
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|i| self.months.get(i))
            .map(String::as_str)
            .unwrap_or(month)
    }
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level filter, overridden by `RUST_LOG`
    pub level: String,
    /// Log file for the TUI; defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// All settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub location: LocationSettings,
    pub refresh: RefreshSettings,
    pub forecast: ForecastSettings,
    pub ui: UiLabels,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings from an explicit path, the XDG config file or defaults
    ///
    /// An explicit path must exist; the XDG file is only used when present.
    ///
    /// # Returns
    /// * `Ok((Settings, ConfigSource))` - Validated settings and their origin
    /// * `Err(ConfigError)` - If the file cannot be read, parsed or validated
    pub fn load(explicit: Option<&Path>) -> Result<(Settings, ConfigSource), ConfigError> {
        let source = match explicit {
            Some(path) => ConfigSource::Explicit(path.to_path_buf()),
            None => match default_config_path() {
                Some(path) if path.exists() => ConfigSource::XdgConfig(path),
                _ => ConfigSource::Defaults,
            },
        };

        let settings = match &source {
            ConfigSource::Explicit(path) | ConfigSource::XdgConfig(path) => {
                Settings::from_file(path)?
            }
            ConfigSource::Defaults => Settings::default(),
        };
        settings.validate()?;

        Ok((settings, source))
    }

    /// Reads and parses a settings file without validating it
    pub fn from_file(path: &Path) -> Result<Settings, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_coordinates(self.location.latitude, self.location.longitude)?;
        if self.refresh.interval_minutes == 0 {
            return Err(ConfigError::Invalid(
                "refresh.interval_minutes must be at least 1".to_string(),
            ));
        }
        if self.ui.days.len() != 7 {
            return Err(ConfigError::Invalid(format!(
                "ui.days needs 7 names, got {}",
                self.ui.days.len()
            )));
        }
        if self.ui.months.len() != 12 {
            return Err(ConfigError::Invalid(format!(
                "ui.months needs 12 names, got {}",
                self.ui.months.len()
            )));
        }
        Ok(())
    }
}

/// Checks latitude and longitude ranges
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ConfigError::Invalid(format!(
            "latitude {} is outside -90..90",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ConfigError::Invalid(format!(
            "longitude {} is outside -180..180",
            longitude
        )));
    }
    Ok(())
}

/// `config.toml` in the platform config directory, if one can be determined
pub fn default_config_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_NAME)?;
    Some(project_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Default log file in the platform data directory
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", APP_NAME)?;
    Some(project_dirs.data_dir().join(format!("{}.log", APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!((settings.location.latitude - 52.5244).abs() < 0.0001);
        assert!((settings.location.longitude - 13.4105).abs() < 0.0001);
        assert_eq!(settings.refresh.interval_minutes, 15);
        assert_eq!(settings.forecast.hour_labels, HourLabelStyle::Wrapped);
        assert_eq!(settings.ui.footer, "Updated");
        assert_eq!(settings.logging.level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [location]
            latitude = 48.137
            longitude = 11.575

            [refresh]
            interval_minutes = 30

            [forecast]
            hour_labels = "raw"

            [ui]
            footer = "Aktualisiert"
            days = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]
            "#,
        );

        let (settings, source) = Settings::load(Some(&path)).unwrap();
        assert_eq!(source, ConfigSource::Explicit(path.clone()));
        assert!((settings.location.latitude - 48.137).abs() < 0.0001);
        assert_eq!(settings.refresh.interval_minutes, 30);
        assert_eq!(settings.forecast.hour_labels, HourLabelStyle::Raw);
        assert_eq!(settings.ui.footer, "Aktualisiert");
        assert_eq!(settings.ui.day_name(6), "So");
        // untouched sections keep their defaults
        assert_eq!(settings.ui.months.len(), 12);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[location\nlatitude = ");
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_wrong_type() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[refresh]\ninterval_minutes = \"soon\"\n");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[location]\nlatitude = 91.0\n");
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("latitude 91 is outside"));

        let path = write_config(&dir, "[refresh]\ninterval_minutes = 0\n");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(ConfigError::Invalid(_))
        ));

        let path = write_config(&dir, "[ui]\nmonths = [\"Jan\"]\n");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(0.0, 0.0).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(45.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_label_lookup() {
        let labels = UiLabels::default();
        assert_eq!(labels.day_name(0), "Mon");
        assert_eq!(labels.day_name(9), "?");
        assert_eq!(labels.month_name("06"), "June");
        assert_eq!(labels.month_name("12"), "December");
        assert_eq!(labels.month_name("00"), "00");
        assert_eq!(labels.month_name("xx"), "xx");
    }

    #[test]
    fn test_month_name_falls_back_to_owned_input() {
        let labels = UiLabels {
            months: vec!["Jan".to_string()],
            ..UiLabels::default()
        };
        let month = String::from("07");
        let name = labels.month_name(&month);
        assert_eq!(name, "07");
        assert_eq!(labels.month_name(&String::from("01")), "Jan");
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Defaults.to_string(), "(defaults)");
        assert_eq!(
            ConfigSource::Explicit(PathBuf::from("/etc/x.toml")).to_string(),
            "/etc/x.toml"
        );
    }
}
