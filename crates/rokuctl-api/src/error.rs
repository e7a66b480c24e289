use thiserror::Error;

/// Top-level error type for the `rokuctl-api` crate.
///
/// Every client and discovery operation returns one of these to its caller.
/// Nothing is retried internally; the CLI and TUI decide what the user sees.
#[derive(Debug, Error)]
pub enum Error {
    // ── Command table ───────────────────────────────────────────────
    /// Symbolic command name is not in the key table.
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (timeout, connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("Device returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Applications ────────────────────────────────────────────────
    /// No installed app matched by exact name or substring search.
    #[error("No app matching '{query}'")]
    AppNotFound { query: String },

    /// The active-app query decoded to something other than exactly one app.
    #[error("Expected exactly one active app, found {count}")]
    AmbiguousActiveApp { count: usize },

    // ── Data ────────────────────────────────────────────────────────
    /// XML deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Discovery ───────────────────────────────────────────────────
    /// SSDP sweep failed or returned an unparsable location.
    #[error("Device discovery failed: {message}")]
    Discovery { message: String },
}

impl Error {
    /// Returns `true` for failures that happened on the wire: timeouts,
    /// refused connections, and non-success HTTP statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    /// Returns `true` if the underlying request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the device could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }
}
