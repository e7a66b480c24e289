//! Key press, hold/release, literal text, and the key table listing.

use rokuctl_api::{EcpClient, keys};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct KeyEntry {
    name: &'static str,
    token: &'static str,
}

#[derive(Tabled)]
struct KeyRow {
    #[tabled(rename = "Key")]
    name: String,
    #[tabled(rename = "Token")]
    token: String,
}

/// Fail on the first name missing from the key table.
pub fn validate<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), CliError> {
    for name in names {
        if keys::lookup(name).is_none() {
            return Err(CliError::UnknownKey {
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

/// Press each key in order; stops at the first failure.
pub async fn press(client: &EcpClient, names: &[String]) -> Result<(), CliError> {
    for name in names {
        debug!(key = %name, "press");
        client.key_press(name).await?;
    }
    Ok(())
}

pub async fn hold(client: &EcpClient, name: &str) -> Result<(), CliError> {
    client.key_down(name).await?;
    Ok(())
}

pub async fn release(client: &EcpClient, name: &str) -> Result<(), CliError> {
    client.key_up(name).await?;
    Ok(())
}

pub async fn type_text(client: &EcpClient, text: &str) -> Result<(), CliError> {
    client.send_literal(text).await?;
    Ok(())
}

/// `rokuctl keys`: the static table, no device needed.
pub fn list(global: &GlobalOpts) -> Result<(), CliError> {
    let entries: Vec<KeyEntry> = keys::KEYS
        .iter()
        .map(|&(name, token)| KeyEntry { name, token })
        .collect();
    let color = output::should_color(&global.color);

    let out = output::render_list(
        &global.output,
        &entries,
        |e| KeyRow {
            name: output::accent(e.name, color),
            token: output::muted(e.token, color),
        },
        |e| e.name.to_owned(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
