//! CLI-side device resolution: global flags + config file → `DeviceConfig`.
//!
//! The API client never sees these types; it receives a pre-built
//! `DeviceConfig`.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rokuctl_api::{DeviceConfig, EcpClient, find_devices};
use rokuctl_config::{HOST_ENV, Overrides, ResolvedHost};
use tracing::{debug, info};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use rokuctl_config::{
    config_path, load_config, load_config_or_default, load_stored_config, save_config,
};

/// Command-line overrides for the shared resolution chain.
pub fn overrides(global: &GlobalOpts) -> Overrides {
    Overrides {
        ip: global.ip.clone(),
        device: global.device.clone(),
        timeout: global.timeout,
        port: global.port,
    }
}

/// Resolve the target device: `--ip`, `$ROKU`, profile, then discovery.
pub async fn resolve_device(global: &GlobalOpts) -> Result<DeviceConfig, CliError> {
    let cfg = load_config_or_default();
    let overrides = overrides(global);
    let env_host = std::env::var(HOST_ENV).ok();

    let resolved = match rokuctl_config::resolve_configured_host(
        &cfg,
        &overrides,
        env_host.as_deref(),
    )? {
        Some(resolved) => resolved,
        None => discover_first(global.quiet).await?,
    };

    debug!(host = %resolved.host, source = ?resolved.source, "resolved device");
    Ok(rokuctl_config::device_config(&cfg, &overrides, &resolved)?)
}

/// Build the client for the resolved device.
pub async fn build_client(global: &GlobalOpts) -> Result<EcpClient, CliError> {
    let device = resolve_device(global).await?;
    Ok(EcpClient::new(&device)?)
}

/// Run one sweep and take the first answering device.
async fn discover_first(quiet: bool) -> Result<ResolvedHost, CliError> {
    let spinner = discovery_spinner(quiet);
    let found = find_devices().await;
    spinner.finish_and_clear();

    let locations = found?;
    let resolved = rokuctl_config::first_discovered_host(&locations).ok_or(CliError::NoDevice)?;
    info!(host = %resolved.host, "using discovered device");
    Ok(resolved)
}

/// Spinner shown on stderr while an SSDP sweep runs.
pub fn discovery_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Searching for devices...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
