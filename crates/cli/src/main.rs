//! Procenten CLI - Interactive Dutch percentage calculator
//! Composition root: configuration, logging, stdin/stdout wiring

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use procenten_core::application::{DirectionInput, Session, SessionConfig};
use procenten_core::port::StreamConsole;

const DEFAULT_LOG_FILTER: &str = "procenten=warn";

#[derive(Parser)]
#[command(name = "procenten")]
#[command(about = "Procenten - eenvoudige Nederlandstalige procentencalculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, env = "PROCENTEN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// How increase/decrease answers are read
    #[arg(long, env = "PROCENTEN_DIRECTION_INPUT", value_enum, default_value_t = DirectionArg::Letter)]
    direction_input: DirectionArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    /// Any answer starting with "v" increases, anything else decreases
    Letter,
    /// Only v/verhogen/+ or l/verlagen/- are accepted
    Explicit,
}

impl From<DirectionArg> for DirectionInput {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Letter => DirectionInput::Letter,
            DirectionArg::Explicit => DirectionInput::Explicit,
        }
    }
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    // stdout belongs to the interactive session
    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(io::stderr))
            .init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    // 1. Configuration (flags + env)
    let cli = Cli::parse();

    // 2. Logging
    init_logging(cli.log_format)?;
    info!(
        version = procenten_core::VERSION,
        direction_input = ?cli.direction_input,
        "Procenten starting"
    );

    // 3. Wire the console port to the process streams
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = StreamConsole::new(stdin.lock(), stdout.lock());

    // 4. Run the session until exit or end of input
    let config = SessionConfig {
        direction_input: cli.direction_input.into(),
    };
    Session::new(console, config)
        .run()
        .context("Console I/O failed")?;

    Ok(())
}
