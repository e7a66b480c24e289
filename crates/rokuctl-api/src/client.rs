// ECP HTTP client
//
// Wraps `reqwest::Client` with device URL construction and status checking.
// Endpoint groups (key presses, apps) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use tracing::debug;
use url::Url;

use crate::config::DeviceConfig;
use crate::error::Error;
use crate::transport::TransportConfig;

/// HTTP client bound to one device's control endpoint.
///
/// Holds no mutable state: the base URL and the timeout baked into the
/// underlying `reqwest::Client` are fixed at construction.
#[derive(Debug, Clone)]
pub struct EcpClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EcpClient {
    /// Create a client for the device described by `config`.
    pub fn new(config: &DeviceConfig) -> Result<Self, Error> {
        let http = TransportConfig::new(config.timeout).build_client()?;
        let base_url = config.base_url()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// `base_url` is the device root, e.g. `http://192.168.1.40:8060`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Host part of the base URL, for status lines and logs.
    pub fn host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an ECP path such as `keypress/Home`.
    ///
    /// `path` must already be escaped.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// `endpoint(prefix)` with `segment` appended as one escaped path
    /// segment, so `?`, `#` and `/` in device-supplied ids stay in the path.
    pub(crate) fn endpoint_with_segment(&self, prefix: &str, segment: &str) -> Result<Url, Error> {
        let mut url = self.endpoint(prefix)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(segment);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an empty-bodied POST. The response body is not consumed.
    pub(crate) async fn post(&self, url: Url) -> Result<(), Error> {
        debug!("POST {}", url);

        let resp = self.http.post(url).send().await?;
        Self::check_status(&resp)?;
        Ok(())
    }

    /// Send a GET and return the response body as text.
    pub(crate) async fn get_text(&self, url: Url) -> Result<String, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        Self::check_status(&resp)?;
        Ok(resp.text().await?)
    }

    fn check_status(resp: &reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            })
        }
    }
}
