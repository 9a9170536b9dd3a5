//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::calculator::Operation;
use crate::containers::Demo;
use crate::display::Theme;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Create custom help text with consistent styling
fn create_custom_help() -> String {
    let mut help = String::new();

    help.push_str(&format!("{}\n", Theme::heading("Quick Start:")));
    help.push_str("  $ tribble hello                 # Say hello interactively\n");
    help.push_str("  $ tribble containers --only set # One container demo\n");
    help.push_str("  $ tribble calc divide 7 2       # Evaluate one operation\n");
    help.push_str("  $ tribble average 85 92 78      # Mean of some numbers\n\n");

    help.push_str("Starter programs for learning the basics.\n\n");

    help.push_str(&Theme::heading("Usage:"));
    help.push_str(" tribble [OPTIONS] <COMMAND>\n\n");

    help.push_str(&format!("{}\n", Theme::heading("Commands:")));
    help.push_str("  hello         Read your name and greet you\n");
    help.push_str("  containers    Vec, map, tuple, set and array demos\n");
    help.push_str("  functions     Functions, return values and errors\n");
    help.push_str("  calculator    Calculator walkthrough\n");
    help.push_str("  greeting      Greeting helpers walkthrough\n");
    help.push_str("  greet         Greet each name given on the command line\n");
    help.push_str("  calc          Evaluate one calculator operation\n");
    help.push_str("  average       Average of the given numbers\n");
    help.push_str("  init          Set up .tribble directory\n");
    help.push_str("  config        Display active settings\n");
    help.push_str("  help          Print this message or the help of the given subcommand(s)\n\n");

    help.push_str("See 'tribble help <command>' for more information on a specific command.\n\n");

    help.push_str(&format!("{}\n", Theme::heading("Options:")));
    help.push_str("  -c, --config <CONFIG>  Path to custom settings.toml file\n");
    help.push_str("      --info             Show where settings were loaded from\n");
    help.push_str("  -h, --help             Print help\n");
    help.push_str("  -V, --version          Print version\n");

    help
}

/// Find the `-c/--config` value in raw arguments.
///
/// Settings decide whether help output is styled, so they are loaded before
/// clap builds the command. Scanning stops at `--`.
pub fn config_path_from_args(args: &[OsString]) -> Option<PathBuf> {
    let mut iter = args.iter().skip(1);
    let mut found = None;
    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else {
            continue;
        };
        if text == "--" {
            break;
        }
        if text == "--config" || text == "-c" {
            found = iter.next().map(PathBuf::from);
        } else if let Some(value) = text.strip_prefix("--config=") {
            found = Some(PathBuf::from(value));
        } else if let Some(value) = text.strip_prefix("-c").filter(|v| !v.is_empty()) {
            found = Some(PathBuf::from(value.strip_prefix('=').unwrap_or(value)));
        }
    }
    found
}

/// Starter programs
#[derive(Parser)]
#[command(
    name = "tribble",
    version = env!("CARGO_PKG_VERSION"),
    about = "Starter programs for learning the basics",
    next_line_help = true,
    styles = clap_cargo_style(),
    override_help = create_custom_help()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show where settings were loaded from
    #[arg(long, global = true)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print a greeting, read a name from stdin, greet it three ways
    Hello,

    /// Container demos
    #[command(after_help = "Examples:\n  tribble containers\n  tribble containers --only dict")]
    Containers {
        /// Run a single demo instead of all of them
        #[arg(long, value_enum)]
        only: Option<Demo>,
    },

    /// Functions walkthrough: greet, add, calculate_average
    Functions,

    /// Calculator walkthrough: add, subtract, multiply, divide
    Calculator,

    /// Greeting walkthrough: greet with fallback, add_numbers
    Greeting,

    /// Greet each name; with no names, greet the world
    Greet {
        /// Names to greet
        #[arg(value_name = "NAME")]
        names: Vec<String>,
    },

    /// Evaluate one calculator operation
    #[command(after_help = "Examples:\n  tribble calc add 5 3\n  tribble calc divide 7 2 --json\n  tribble calc subtract -- -5 3")]
    Calc {
        #[arg(value_enum)]
        operation: Operation,

        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Output JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Average of the given numbers
    Average {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        numbers: Vec<f64>,

        /// Output JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Initialize project
    #[command(about = "Set up .tribble directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc_with_negative_operands() {
        let cli = Cli::try_parse_from(["tribble", "calc", "add", "-5", "-3"]).unwrap();
        match cli.command {
            Commands::Calc { operation, a, b, json } => {
                assert_eq!(operation, Operation::Add);
                assert_eq!((a, b), (-5, -3));
                assert!(!json);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_parse_containers_only() {
        let cli = Cli::try_parse_from(["tribble", "containers", "--only", "set"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Containers { only: Some(Demo::Set) }
        ));
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::try_parse_from(["tribble", "config", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_reject_unknown_operation() {
        assert!(Cli::try_parse_from(["tribble", "calc", "modulo", "1", "2"]).is_err());
    }

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_config_path_from_args() {
        let cases = [
            (vec!["tribble", "--help"], None),
            (vec!["tribble", "--config", "a.toml", "--help"], Some("a.toml")),
            (vec!["tribble", "hello", "-c", "b.toml"], Some("b.toml")),
            (vec!["tribble", "--config=c.toml", "config"], Some("c.toml")),
            (vec!["tribble", "-cd.toml", "config"], Some("d.toml")),
            (vec!["tribble", "greet", "--", "--config", "x"], None),
        ];
        for (args, expected) in cases {
            assert_eq!(
                config_path_from_args(&os_args(&args)),
                expected.map(PathBuf::from),
                "{args:?}"
            );
        }
    }
}
