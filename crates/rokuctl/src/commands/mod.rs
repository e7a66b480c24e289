//! Command dispatch: bridges CLI args -> client calls -> output formatting.

pub mod apps;
pub mod config_cmd;
pub mod discover;
pub mod keys;

use rokuctl_api::EcpClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Reject bad input before any device is resolved or contacted.
pub fn preflight(cmd: &Command) -> Result<(), CliError> {
    match cmd {
        Command::Key(args) => keys::validate(args.names.iter().map(String::as_str)),
        Command::Down(args) | Command::Up(args) => keys::validate([args.name.as_str()]),
        _ => Ok(()),
    }
}

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &EcpClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Key(args) => keys::press(client, &args.names).await,
        Command::Down(args) => keys::hold(client, &args.name).await,
        Command::Up(args) => keys::release(client, &args.name).await,
        Command::Type(args) => keys::type_text(client, &args.text).await,
        Command::Apps(args) => apps::handle(client, args, global).await,
        // Handled before a device is resolved
        Command::Keys | Command::Discover | Command::Config(_) | Command::Completions(_) => {
            Ok(())
        }
    }
}
