//! Gomoku binary.
//!
//! # Usage
//!
//! ```bash
//! # Default window, light menu
//! gomoku run
//!
//! # Dark menu, logs to a file
//! gomoku run --theme dark --log-file gomoku.log
//! ```

use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::{Parser, Subcommand, ValueEnum};
use gomoku_app::{
    Theme,
    constants::{WINDOW_HEIGHT, WINDOW_WIDTH},
};
use gomoku_tui::{TerminalBackend, build_app};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Gomoku in the terminal
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Play Gomoku in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write logs to this file. Logs are discarded otherwise.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the menu and play
    Run {
        /// Window width in window units
        #[arg(long, default_value_t = WINDOW_WIDTH)]
        width: u32,

        /// Window height in window units
        #[arg(long, default_value_t = WINDOW_HEIGHT)]
        height: u32,

        /// Menu colour scheme
        #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Install the subscriber. The terminal belongs to the UI, so logs only go to
/// a file.
fn init_tracing(log_file: Option<&Path>, log_level: &str) -> std::io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), &cli.log_level)?;

    match cli.command {
        Command::Run { width, height, theme } => {
            // Validate before touching the terminal
            let mut app = build_app(width, height, theme.into())?;
            let mut backend = TerminalBackend::new(app.windows_size())?;

            tracing::info!(width, height, ?theme, "Gomoku starting");
            app.run(&mut backend)?;
        },
    }

    Ok(())
}
