// Shared transport configuration for building reqwest::Client instances.
//
// Every call on a device goes through one client carrying the device's
// timeout, so a hung device surfaces as a transport error instead of
// stalling the remote.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("rokuctl/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl TransportConfig {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Transport)
    }
}
