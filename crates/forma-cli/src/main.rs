use std::process::ExitCode;

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod input;
mod output;
mod ui;

/// Exit status when every input validated.
const EXIT_OK: u8 = 0;
/// Exit status for configuration, I/O, or parse failures.
const EXIT_ERROR: u8 = 1;
/// Exit status when at least one input failed validation.
const EXIT_INVALID: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::from(EXIT_OK),
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(error) => {
            eprintln!("forma error: {error:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Returns `Ok(false)` when the command ran but reported invalid input.
fn run() -> anyhow::Result<bool> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(cli.config.as_deref())?;
    let flags = cli.global_flags(bootstrap::default_format(&config));
    ui::init(&flags);

    commands::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FORMA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
