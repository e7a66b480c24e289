//! Config subcommand handlers.

use dialoguer::{Confirm, Input, Select};
use rokuctl_api::{discovery, find_devices};
use rokuctl_config::{Config, DeviceProfile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, discovery_spinner};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn validate_name(name: &str) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "device name cannot be empty".into(),
        });
    }
    Ok(())
}

/// Insert or replace a profile, optionally making it the default.
///
/// The first device saved becomes the default even without `--default`.
fn upsert_device(cfg: &mut Config, name: &str, profile: DeviceProfile, make_default: bool) {
    let first = cfg.devices.is_empty();
    cfg.devices.insert(name.to_owned(), profile);
    if make_default || first || cfg.default_device.is_none() {
        cfg.default_device = Some(name.to_owned());
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: pick a discovered device ──────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("rokuctl configuration");
            eprintln!("   Config path: {}\n", config_path.display());

            // An unparsable file fails here, before any prompt.
            let mut cfg = config::load_stored_config()?;

            if config_path.exists() {
                let overwrite = Confirm::new()
                    .with_prompt("A config file already exists. Add a device to it?")
                    .default(true)
                    .interact()
                    .map_err(prompt_err)?;
                if !overwrite {
                    return Ok(());
                }
            }

            let spinner = discovery_spinner(global.quiet);
            let found = find_devices().await;
            spinner.finish_and_clear();
            let hosts: Vec<String> = found?.iter().filter_map(discovery::host_of).collect();

            let host = if hosts.is_empty() {
                eprintln!("   No devices answered discovery.");
                Input::<String>::new()
                    .with_prompt("Device IP address")
                    .interact_text()
                    .map_err(prompt_err)?
            } else {
                let mut choices = hosts.clone();
                choices.push("Enter an address manually".into());
                let selection = Select::new()
                    .with_prompt("Device")
                    .items(&choices)
                    .default(0)
                    .interact()
                    .map_err(prompt_err)?;
                match hosts.get(selection) {
                    Some(host) => host.clone(),
                    None => Input::<String>::new()
                        .with_prompt("Device IP address")
                        .interact_text()
                        .map_err(prompt_err)?,
                }
            };

            let name: String = Input::new()
                .with_prompt("Device name")
                .default("living-room".into())
                .interact_text()
                .map_err(prompt_err)?;
            validate_name(&name)?;

            upsert_device(&mut cfg, &name, DeviceProfile::new(host.clone()), true);
            config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Default device: {name} ({host})");
            eprintln!("\n  Test it: rokuctl key home");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| format!("{c:#?}"),
                |c| c.default_device.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── SetDevice <name> <host> ─────────────────────────────────
        ConfigCommand::SetDevice {
            name,
            host,
            port,
            default,
        } => {
            validate_name(&name)?;
            if host.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "host".into(),
                    reason: "device host cannot be empty".into(),
                });
            }

            let mut cfg = config::load_stored_config()?;
            let profile = DeviceProfile {
                host,
                port,
                timeout: None,
            };
            upsert_device(&mut cfg, &name, profile, default);
            config::save_config(&cfg)?;

            if !global.quiet {
                let marker = if cfg.default_device.as_deref() == Some(name.as_str()) {
                    " (default)"
                } else {
                    ""
                };
                eprintln!("✓ Saved device '{name}'{marker}");
            }
            Ok(())
        }
    }
}
