// ── Runtime device configuration ──
//
// Describes *where* the device lives and how long to wait for it.
// The CLI/TUI resolve a host, build a `DeviceConfig` once, and hand it in;
// nothing here reads files or the environment.

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// ECP listens on this port on every Roku device.
pub const DEFAULT_PORT: u16 = 8060;

/// Per-request timeout shared by every call on one client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for talking to a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// IP address or hostname of the device.
    pub host: String,
    /// ECP port (8060 unless a proxy sits in between).
    pub port: u16,
    /// Request timeout.
    pub timeout: Duration,
}

impl DeviceConfig {
    /// Config for `host` with the standard port and timeout.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The device's control endpoint, `http://<host>:<port>/`.
    ///
    /// Bare IPv6 literals are bracketed so they survive URL parsing.
    pub fn base_url(&self) -> Result<Url, Error> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        Ok(Url::parse(&format!("http://{host}:{}/", self.port))?)
    }
}
