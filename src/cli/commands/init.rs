//! Init and Config commands.

use std::path::Path;

use crate::config::Settings;
use crate::display::Theme;
use crate::io::ExitCode;

/// Run init command - create configuration file under `dir`.
pub fn run_init(dir: &Path, force: bool) -> ExitCode {
    match Settings::init_config_file(dir, force) {
        Ok(path) => {
            if force {
                println!("Wrote configuration file at: {}", path.display());
            } else {
                println!("Created configuration file at: {}", path.display());
            }
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::ConfigError
        }
    }
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings) -> ExitCode {
    println!("{}", Theme::heading("Current Configuration:"));
    println!("{}", "=".repeat(50));
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}
