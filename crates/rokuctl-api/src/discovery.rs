//! SSDP device discovery.
//!
//! Sends one `M-SEARCH` for the Roku ECP service type to the SSDP multicast
//! group and collects unicast `HTTP/1.1 200 OK` replies for a fixed window.
//! The socket binds an ephemeral port; it never listens on 1900.
//!
//! Each reply's `LOCATION` header is parsed as a URL. A single unparsable
//! location fails the whole sweep with [`Error::Discovery`] rather than
//! being skipped. Replies without a `LOCATION`, or for another service type,
//! are ignored.

use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, info, trace};
use url::Url;

use crate::error::Error;

/// SSDP multicast group.
pub const SSDP_MULTICAST_ADDR: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);

/// SSDP port.
pub const SSDP_PORT: u16 = 1900;

/// Service type advertised by Roku devices.
pub const ROKU_SEARCH_TARGET: &str = "roku:ecp";

/// How long a sweep collects replies.
pub const DISCOVERY_WINDOW: Duration = Duration::from_secs(5);

/// One SSDP sweep, with overridable target address, service type and window.
#[derive(Debug, Clone)]
pub struct Discovery {
    target: SocketAddr,
    search_target: String,
    window: Duration,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            target: SocketAddr::V4(SocketAddrV4::new(SSDP_MULTICAST_ADDR, SSDP_PORT)),
            search_target: ROKU_SEARCH_TARGET.to_owned(),
            window: DISCOVERY_WINDOW,
        }
    }
}

impl Discovery {
    /// Send the `M-SEARCH` to `target` instead of the multicast group.
    #[must_use]
    pub fn with_target(mut self, target: SocketAddr) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_search_target(mut self, search_target: impl Into<String>) -> Self {
        self.search_target = search_target.into();
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Run the sweep. Blocks (asynchronously) for the full window.
    pub async fn run(&self) -> Result<Vec<Url>, Error> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(|e| discovery_error(format!("failed to bind UDP socket: {e}")))?;

        let request = msearch(&self.search_target, self.window);
        socket
            .send_to(request.as_bytes(), self.target)
            .await
            .map_err(|e| discovery_error(format!("failed to send M-SEARCH: {e}")))?;
        debug!(target = %self.target, st = %self.search_target, "M-SEARCH sent");

        let deadline = Instant::now() + self.window;
        let mut locations = Vec::new();
        let mut buf = [0u8; 8192];

        loop {
            let received = tokio::time::timeout_at(deadline, socket.recv_from(&mut buf)).await;
            let Ok(received) = received else {
                break;
            };
            let (n, from) =
                received.map_err(|e| discovery_error(format!("SSDP receive failed: {e}")))?;
            let data = String::from_utf8_lossy(&buf[..n]);
            match parse_search_response(&data, &self.search_target) {
                Some(location) => {
                    debug!(%from, %location, "SSDP reply");
                    locations.push(location);
                }
                None => trace!(%from, "ignoring SSDP datagram"),
            }
        }

        let urls = parse_locations(&locations)?;
        info!(count = urls.len(), "discovery finished");
        Ok(urls)
    }
}

/// Run a default sweep: `roku:ecp`, multicast, five seconds.
pub async fn find_devices() -> Result<Vec<Url>, Error> {
    Discovery::default().run().await
}

/// Parse every location; the first bad one fails the batch.
pub fn parse_locations<S: AsRef<str>>(locations: &[S]) -> Result<Vec<Url>, Error> {
    locations
        .iter()
        .map(|loc| {
            let loc = loc.as_ref();
            Url::parse(loc).map_err(|e| discovery_error(format!("invalid location '{loc}': {e}")))
        })
        .collect()
}

/// The host a discovered location points at, usable as a device address.
pub fn host_of(location: &Url) -> Option<String> {
    location.host().map(|host| match host {
        url::Host::Ipv6(addr) => addr.to_string(),
        other => other.to_string(),
    })
}

fn discovery_error(message: String) -> Error {
    Error::Discovery { message }
}

fn msearch(search_target: &str, window: Duration) -> String {
    let mx = window.as_secs().max(1);
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {SSDP_MULTICAST_ADDR}:{SSDP_PORT}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         MX: {mx}\r\n\
         ST: {search_target}\r\n\
         \r\n"
    )
}

/// Extract `LOCATION` from a search reply for `search_target`.
fn parse_search_response(data: &str, search_target: &str) -> Option<String> {
    let mut lines = data.lines();
    let status = lines.next()?.trim().to_ascii_uppercase();
    if !(status.starts_with("HTTP/") && status.contains(" 200")) {
        return None;
    }

    let headers = parse_headers(lines);
    if search_target != "ssdp:all" {
        let st = headers.get("ST")?;
        if !st.eq_ignore_ascii_case(search_target) {
            return None;
        }
    }
    headers.get("LOCATION").cloned()
}

fn parse_headers<'a, I>(lines: I) -> HashMap<String, String>
where
    I: Iterator<Item = &'a str>,
{
    let mut headers = HashMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        // Split on the first ':' only; values (URLs) contain more.
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_uppercase();
            let value = value.trim();
            if !name.is_empty() && !value.is_empty() {
                headers.insert(name, value.to_owned());
            }
        }
    }
    headers
}
