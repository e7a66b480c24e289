//! `rokuctl-tui`: an interactive terminal remote for Roku devices.
//!
//! Three views share the screen: `remote` (every mapped key goes straight to
//! the device), `insert` (type text, Enter sends it as literal key presses)
//! and `apps` (type part of a channel name, Enter launches the first match).
//!
//! Logs are written to a file (default `/tmp/rokuctl-tui.log`) so they never
//! corrupt the terminal UI.
//!
//! Entry point: argument parsing, tracing setup, panic hooks, device
//! resolution, and app launch.

mod action;
mod app;
mod component;
mod event;
mod keymap;
mod theme;
mod tui;
mod view;
mod views;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use rokuctl_api::{EcpClient, find_devices};
use rokuctl_config::{HOST_ENV, Overrides};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

/// Interactive terminal remote for Roku devices.
#[derive(Parser, Debug)]
#[command(name = "rokuctl-tui", version, about)]
struct Cli {
    /// Device IP address or hostname (falls back to $ROKU)
    #[arg(short = 'i', long)]
    ip: Option<String>,

    /// Named device profile from the rokuctl config file
    #[arg(short = 'd', long, env = "ROKUCTL_DEVICE")]
    device: Option<String>,

    /// ECP port (default 8060)
    #[arg(long)]
    port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long, env = "ROKUCTL_TIMEOUT")]
    timeout: Option<u64>,

    /// Log file path
    #[arg(long, default_value = "/tmp/rokuctl-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may log to stdout/stderr while the TUI is up.
/// Hold the returned guard for the lifetime of the app so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("rokuctl_tui={log_level},rokuctl_api={log_level}"))
    });

    let log_dir = cli.log_file.parent().unwrap_or(Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("rokuctl-tui.log"));

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

/// `--ip`, then `$ROKU`, then a config profile, then the first device that
/// answers discovery. Runs before the terminal switches to the TUI.
async fn build_client(cli: &Cli) -> Result<EcpClient> {
    let cfg = rokuctl_config::load_config_or_default();
    let overrides = Overrides {
        ip: cli.ip.clone(),
        device: cli.device.clone(),
        timeout: cli.timeout,
        port: cli.port,
    };
    let env_host = std::env::var(HOST_ENV).ok();

    let resolved = match rokuctl_config::resolve_configured_host(
        &cfg,
        &overrides,
        env_host.as_deref(),
    )? {
        Some(resolved) => resolved,
        None => {
            eprintln!("Searching for devices...");
            let locations = find_devices().await?;
            rokuctl_config::first_discovered_host(&locations).ok_or_else(|| {
                eyre!("missing device address: pass --ip, set {HOST_ENV}, or configure a device")
            })?
        }
    };

    info!(host = %resolved.host, source = ?resolved.source, "resolved device");
    let device = rokuctl_config::device_config(&cfg, &overrides, &resolved)?;
    Ok(EcpClient::new(&device)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in BEFORE the terminal is touched
    tui::install_hooks(&cli.log_file)?;

    let _log_guard = setup_tracing(&cli);
    info!("starting rokuctl-tui");

    let client = build_client(&cli).await?;
    let mut app = App::new(client);
    app.run().await?;

    Ok(())
}
