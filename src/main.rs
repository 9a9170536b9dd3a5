use clap::{ColorChoice, CommandFactory, FromArgMatches};
use std::ffi::OsString;
use std::path::Path;

use tribble::cli::commands::{average, calc, demos, init};
use tribble::cli::{Cli, Commands, config_path_from_args};
use tribble::display::Theme;
use tribble::io::{ExitCode, OutputFormat};
use tribble::{Settings, logging};

/// Load settings from `--config` or the discovered `.tribble/settings.toml`.
fn load_settings(source: Option<&Path>) -> Result<Settings, Box<figment::Error>> {
    match source {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn main() -> std::process::ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let source = config_path_from_args(&args).or_else(Settings::find_config_file);
    let loaded = load_settings(source.as_deref());

    // Help text is rendered while the command is built, so styling settings go first
    let mut command = match &loaded {
        Ok(settings) => {
            Theme::apply(&settings.display);
            let command = Cli::command();
            if settings.display.color {
                command
            } else {
                command.color(ColorChoice::Never)
            }
        }
        Err(_) => Cli::command(),
    };
    let matches = command
        .try_get_matches_from_mut(args)
        .unwrap_or_else(|e| e.exit());
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.format(&mut command).exit());

    let (settings, source) = match loaded {
        Ok(settings) => (settings, source),
        // init must still work to regenerate a broken file
        Err(e) if matches!(cli.command, Commands::Init { force: true }) => {
            eprintln!("Ignoring configuration error: {e}");
            (Settings::default(), None)
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::ConfigError.into();
        }
    };

    logging::init_with_config(&settings.logging);

    if cli.info {
        match &source {
            Some(path) if path.exists() => eprintln!("Loaded settings from {}", path.display()),
            Some(path) => eprintln!("No settings at {}, using defaults", path.display()),
            None => eprintln!("No settings file found, using defaults"),
        }
    }

    let code = match cli.command {
        Commands::Hello => demos::run_hello(&settings),
        Commands::Containers { only } => demos::run_containers(only),
        Commands::Functions => demos::run_functions(&settings),
        Commands::Calculator => demos::run_calculator(),
        Commands::Greeting => demos::run_greeting(),
        Commands::Greet { names } => demos::run_greet(&names),
        Commands::Calc {
            operation,
            a,
            b,
            json,
        } => calc::run(operation, a, b, OutputFormat::from_json_flag(json)),
        Commands::Average { numbers, json } => average::run(
            &numbers,
            OutputFormat::from_json_flag(json),
            settings.display.average_precision,
        ),
        Commands::Init { force } => match std::env::current_dir() {
            Ok(dir) => init::run_init(&dir, force),
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {e}");
                ExitCode::GeneralError
            }
        },
        Commands::Config => init::run_config(&settings),
    };

    tracing::debug!(target: "tribble", "exit code {:?}", code);
    code.into()
}
