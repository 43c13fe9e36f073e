//! `regress-tui` — terminal dashboard for the EnergyPlus regression tool.
//!
//! Built on [ratatui](https://ratatui.rs) over crossterm. The screen is a
//! fixed stack of title bar, content pane, navigation bar, and status line;
//! F5–F8 switch the content view and `q` quits. Terminals smaller than
//! 120x19 get a warning screen until they are resized.
//!
//! Logs are written to a file (default `/tmp/regress-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, config loading, tracing setup, panic
//! hooks, and dashboard launch.

mod app;
mod component;
mod event;
mod input;
mod layout;
mod render;
mod screen;
mod screens;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use regress_config::Config;

use crate::app::Dashboard;
use crate::tui::Tui;

/// Terminal dashboard for the EnergyPlus regression tool.
#[derive(Parser, Debug)]
#[command(name = "regress-tui", version, about)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short = 'c', long, env = "REGRESS_TUI_CONFIG")]
    config: Option<PathBuf>,

    /// Log file path (overrides `log.file` from the config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Skip the startup banner
    #[arg(long)]
    no_splash: bool,

    /// Write the built-in defaults to the config path and exit. An existing
    /// file is left alone.
    #[arg(long)]
    write_default_config: bool,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(regress_config::config_path)
    }
}

/// Set up file-based tracing. Nothing may log to stdout/stderr while the
/// dashboard owns the terminal. The returned guard flushes logs on drop.
fn setup_tracing(cli: &Cli, config: &Config) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => config.log.level.to_ascii_lowercase(),
        1 => "info".to_owned(),
        2 => "debug".to_owned(),
        _ => "trace".to_owned(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("regress_tui={log_level}")));

    let log_file = cli.log_file.as_ref().unwrap_or(&config.log.file);
    let log_dir = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("regress-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    let config_path = cli.config_path();
    if cli.write_default_config {
        regress_config::save_default_config_to(&config_path)?;
        println!("wrote {}", config_path.display());
        return Ok(());
    }

    let config = regress_config::load_config_from(&config_path)
        .wrap_err_with(|| format!("loading {}", config_path.display()))?;

    // Held until exit so buffered log lines are flushed
    let _log_guard = setup_tracing(&cli, &config);

    let splash = if cli.no_splash || !config.splash.enabled {
        None
    } else {
        Some(config.splash.dwell()?)
    };

    info!(
        config = %config_path.display(),
        splash = ?splash,
        "starting regress-tui"
    );

    let mut tui = Tui::new()?;
    tui.enter()?;
    let mut dashboard = Dashboard::new(splash);
    let result = dashboard.run(&mut tui);

    // Restore the terminal before any error report is printed.
    drop(tui);
    info!(
        size = %dashboard.size(),
        state = %dashboard.state(),
        status = dashboard.status(),
        "regress-tui exited"
    );
    result
}
