//! CLI error types with miette diagnostics.
//!
//! Maps `rokuctl_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use rokuctl_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Device address ───────────────────────────────────────────────
    #[error("No device address")]
    #[diagnostic(
        code(rokuctl::no_device),
        help(
            "Pass --ip <addr>, set the ROKU environment variable,\n\
             or save a device with: rokuctl config set-device <name> <host> --default\n\
             Discovery found no device answering on the local network."
        )
    )]
    NoDevice,

    #[error("Device profile '{name}' not found in configuration")]
    #[diagnostic(
        code(rokuctl::device_not_found),
        help(
            "Available devices: {available}\n\
             Add one with: rokuctl config set-device {name} <host>"
        )
    )]
    UnknownDevice { name: String, available: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach device at {url}")]
    #[diagnostic(
        code(rokuctl::connection_failed),
        help(
            "Check that the device is powered on and on the same network.\n\
             Find devices with: rokuctl discover"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to {url} timed out")]
    #[diagnostic(
        code(rokuctl::timeout),
        help("Increase the timeout with --timeout or check the device is responsive.")
    )]
    Timeout { url: String },

    #[error("Device answered {url} with HTTP {status}")]
    #[diagnostic(code(rokuctl::device_status))]
    DeviceStatus { status: u16, url: String },

    #[error("Device discovery failed: {message}")]
    #[diagnostic(
        code(rokuctl::discovery),
        help("Pass the address directly with --ip or the ROKU environment variable.")
    )]
    Discovery { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Unknown key '{name}'")]
    #[diagnostic(code(rokuctl::unknown_key), help("Run: rokuctl keys to see available keys"))]
    UnknownKey { name: String },

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(rokuctl::not_found),
        help("Run: rokuctl {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Expected one active app, device reported {count}")]
    #[diagnostic(code(rokuctl::ambiguous_active_app))]
    AmbiguousActiveApp { count: usize },

    #[error("Unexpected response from device: {message}")]
    #[diagnostic(code(rokuctl::invalid_response))]
    InvalidResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(rokuctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(rokuctl::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(rokuctl::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(rokuctl::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Discovery { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } | Self::UnknownDevice { .. } => exit_code::NOT_FOUND,
            Self::UnknownKey { .. } | Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── rokuctl_api::Error → CliError mapping ────────────────────────────

impl From<rokuctl_api::Error> for CliError {
    fn from(err: rokuctl_api::Error) -> Self {
        use rokuctl_api::Error;

        let timed_out = err.is_timeout();
        match err {
            Error::UnknownCommand { name } => CliError::UnknownKey { name },

            Error::Transport(source) => {
                let url = source
                    .url()
                    .map_or_else(|| "(unknown)".into(), ToString::to_string);
                if timed_out {
                    CliError::Timeout { url }
                } else {
                    CliError::ConnectionFailed {
                        url,
                        source: Box::new(source),
                    }
                }
            }

            Error::Status { status, url } => CliError::DeviceStatus { status, url },

            Error::InvalidUrl(e) => CliError::Validation {
                field: "ip".into(),
                reason: e.to_string(),
            },

            Error::AppNotFound { query } => CliError::NotFound {
                resource_type: "app".into(),
                identifier: query,
                list_command: "apps list".into(),
            },

            Error::AmbiguousActiveApp { count } => CliError::AmbiguousActiveApp { count },

            Error::Deserialization { message, body: _ } => CliError::InvalidResponse { message },

            Error::Discovery { message } => CliError::Discovery { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownDevice { name, available } => {
                CliError::UnknownDevice { name, available }
            }
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config(Box::new(other)),
        }
    }
}
