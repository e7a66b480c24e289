//! `rokuctl discover`: one SSDP sweep, print every answering device.

use rokuctl_api::{discovery, find_devices};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::cli::GlobalOpts;
use crate::config::discovery_spinner;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct Found {
    host: String,
    location: String,
}

#[derive(Tabled)]
struct FoundRow {
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Location")]
    location: String,
}

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let spinner = discovery_spinner(global.quiet);
    let result = find_devices().await;
    spinner.finish_and_clear();

    let found: Vec<Found> = result?
        .iter()
        .map(|url| Found {
            host: discovery::host_of(url).unwrap_or_default(),
            location: url.to_string(),
        })
        .collect();
    info!(count = found.len(), "discovery finished");

    if found.is_empty() {
        if !global.quiet {
            eprintln!("No devices answered. Check that this machine is on the device's network.");
        }
        return Ok(());
    }

    let color = output::should_color(&global.color);
    let out = output::render_list(
        &global.output,
        &found,
        |f| FoundRow {
            host: output::accent(&f.host, color),
            location: f.location.clone(),
        },
        |f| f.host.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
