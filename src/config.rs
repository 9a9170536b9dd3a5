//! Configuration for the tribble binary.
//!
//! Settings are layered, later sources winning:
//! - Default values
//! - TOML configuration file (`.tribble/settings.toml`, or `--config <FILE>`)
//! - Environment variable overrides
//!
//! Configuration only tunes presentation. It never changes what the
//! arithmetic or greeting functions return.
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `TRIBBLE_` and use double
//! underscores to separate nested levels:
//! - `TRIBBLE_DISPLAY__AVERAGE_PRECISION=3` sets `display.average_precision`
//! - `TRIBBLE_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `TRIBBLE_HELLO__PROMPT="Name: "` sets `hello.prompt`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::hello::DEFAULT_PROMPT;

/// Directory holding the settings file.
pub const CONFIG_DIR: &str = ".tribble";

/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "settings.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TRIBBLE_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Logging levels
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output presentation
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interactive greeting
    #[serde(default)]
    pub hello: HelloConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level for everything without a module override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `tribble = "debug"`
    #[serde(default)]
    pub modules: IndexMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Styled headings in help output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Decimals printed for averages
    #[serde(default = "default_average_precision")]
    pub average_precision: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HelloConfig {
    /// Prompt shown before reading the name
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_version() -> u32 { 1 }
fn default_log_level() -> String { "warn".to_string() }
fn default_true() -> bool { true }
fn default_average_precision() -> usize { 2 }
fn default_prompt() -> String { DEFAULT_PROMPT.to_string() }

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
            hello: HelloConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: IndexMap::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            average_precision: default_average_precision(),
        }
    }
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, discovering the settings file
    /// by walking up from the current directory.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_config_file()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file plus environment overrides.
    ///
    /// A missing file is not an error; defaults and env still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            // Double underscore becomes a dot, single underscore stays in field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find `.tribble/settings.toml` in the current directory or an ancestor.
    pub fn find_config_file() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|dir| dir.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
            .filter(|file| file.exists())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Write a default settings file under `dir`.
    pub fn init_config_file(
        dir: impl AsRef<Path>,
        force: bool,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = dir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
        assert!(settings.display.color);
        assert_eq!(settings.display.average_precision, 2);
        assert_eq!(settings.hello.prompt, "What's your name? ");
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
version = 2

[logging]
default = "info"

[logging.modules]
tribble = "debug"

[display]
color = false
average_precision = 4

[hello]
prompt = "Name please: "
"#;

        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.version, 2);
        assert_eq!(settings.logging.default, "info");
        assert_eq!(settings.logging.modules["tribble"], "debug");
        assert!(!settings.display.color);
        assert_eq!(settings.display.average_precision, 4);
        assert_eq!(settings.hello.prompt, "Name please: ");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        fs::write(&config_path, "[display]\naverage_precision = 1\n").unwrap();

        let settings = Settings::load_from(&config_path).unwrap();

        // Modified value
        assert_eq!(settings.display.average_precision, 1);

        // Defaults still present
        assert_eq!(settings.version, 1);
        assert!(settings.display.color);
        assert_eq!(settings.logging.default, "warn");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_value_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[display]\naverage_precision = \"many\"\n").unwrap();

        assert!(Settings::load_from(&config_path).is_err());
    }

    #[test]
    fn test_save_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.display.average_precision = 5;
        settings.hello.prompt = "Who? ".to_string();

        settings.save(&config_path).unwrap();

        let loaded = Settings::load_from(&config_path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_init_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let path = Settings::init_config_file(temp_dir.path(), false).unwrap();
        assert_eq!(path, temp_dir.path().join(".tribble/settings.toml"));
        assert!(path.exists());

        // Second run without force refuses to overwrite
        assert!(Settings::init_config_file(temp_dir.path(), false).is_err());
        assert!(Settings::init_config_file(temp_dir.path(), true).is_ok());
    }
}
