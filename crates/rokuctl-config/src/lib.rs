//! Shared configuration for the rokuctl CLI and TUI.
//!
//! TOML device profiles, environment overrides, and the device address
//! resolution chain (flag → `ROKU` env var → profile → discovery).
//! Both binaries depend on this crate and translate the result into a
//! `rokuctl_api::DeviceConfig`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use rokuctl_api::{DEFAULT_PORT, DeviceConfig, discovery};

/// Environment variable holding a device address.
pub const HOST_ENV: &str = "ROKU";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("device '{name}' is not configured (available: {available})")]
    UnknownDevice { name: String, available: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Device profile used when `--device` is not given.
    pub default_device: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named device profiles.
    #[serde(default)]
    pub devices: BTreeMap<String, DeviceProfile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            port: default_port(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

/// A named device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceProfile {
    /// IP address or hostname.
    pub host: String,

    /// Override the ECP port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Override the request timeout (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl DeviceProfile {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Comma-separated profile names, for error messages.
    pub fn device_names(&self) -> String {
        if self.devices.is_empty() {
            "none".into()
        } else {
            self.devices.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "rokuctl", "rokuctl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rokuctl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layered over defaults and under `ROKUCTL_*` env vars.
///
/// Nested keys use a double underscore: `ROKUCTL_DEFAULTS__TIMEOUT=10`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path)
        .merge(Env::prefixed("ROKUCTL_").split("__"))
        .extract()?;
    Ok(config)
}

/// Load only what is stored in the canonical file, for edits that are
/// written back. Environment overrides stay out so they never get persisted.
pub fn load_stored_config() -> Result<Config, ConfigError> {
    load_stored_config_from(&config_path())
}

pub fn load_stored_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = file_figment(path).extract()?;
    Ok(config)
}

/// Load config for read-only use. A broken file is logged and replaced by
/// defaults; callers must not save the result.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        warn!(error = %e, path = %config_path().display(), "ignoring unreadable config");
        Config::default()
    })
}

fn file_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Device address resolution ───────────────────────────────────────

/// Where a device address came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
    /// `--ip` on the command line.
    Flag,
    /// The `ROKU` environment variable.
    Env,
    /// A named profile from the config file.
    Profile(String),
    /// First result of an SSDP sweep.
    Discovery,
}

/// A device address plus the profile settings that travel with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    pub host: String,
    pub source: HostSource,
    pub profile: Option<DeviceProfile>,
}

/// Command-line inputs to resolution. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub ip: Option<String>,
    pub device: Option<String>,
    pub timeout: Option<u64>,
    pub port: Option<u16>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve a device address without touching the network.
///
/// Order: `--ip`, then `env_host` (the `ROKU` variable), then the profile
/// named by `--device` or `default_device`. Returns `Ok(None)` when nothing
/// is configured and the caller should fall back to discovery.
pub fn resolve_configured_host(
    cfg: &Config,
    overrides: &Overrides,
    env_host: Option<&str>,
) -> Result<Option<ResolvedHost>, ConfigError> {
    if let Some(ip) = non_empty(overrides.ip.as_deref()) {
        return Ok(Some(ResolvedHost {
            host: ip.to_owned(),
            source: HostSource::Flag,
            profile: None,
        }));
    }

    if let Some(ip) = non_empty(env_host) {
        return Ok(Some(ResolvedHost {
            host: ip.to_owned(),
            source: HostSource::Env,
            profile: None,
        }));
    }

    let explicit = non_empty(overrides.device.as_deref());
    let Some(name) = explicit.or_else(|| non_empty(cfg.default_device.as_deref())) else {
        return Ok(None);
    };

    match cfg.devices.get(name) {
        Some(profile) => {
            debug!(device = name, host = %profile.host, "using device profile");
            Ok(Some(ResolvedHost {
                host: profile.host.clone(),
                source: HostSource::Profile(name.to_owned()),
                profile: Some(profile.clone()),
            }))
        }
        None => Err(ConfigError::UnknownDevice {
            name: name.to_owned(),
            available: cfg.device_names(),
        }),
    }
}

/// Host of the first discovered device, the way the remote picks a target
/// when several answer.
pub fn first_discovered_host(locations: &[Url]) -> Option<ResolvedHost> {
    let host = locations.iter().find_map(discovery::host_of)?;
    Some(ResolvedHost {
        host,
        source: HostSource::Discovery,
        profile: None,
    })
}

/// Build the immutable client config for `resolved`.
///
/// Port and timeout: command-line override, then profile, then `[defaults]`.
/// Zero is rejected for both, wherever it came from.
pub fn device_config(
    cfg: &Config,
    overrides: &Overrides,
    resolved: &ResolvedHost,
) -> Result<DeviceConfig, ConfigError> {
    let profile = resolved.profile.as_ref();
    let port = overrides
        .port
        .or_else(|| profile.and_then(|p| p.port))
        .unwrap_or(cfg.defaults.port);
    let timeout = overrides
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .unwrap_or(cfg.defaults.timeout);

    if port == 0 {
        return Err(ConfigError::Validation {
            field: "port".into(),
            reason: "must be between 1 and 65535".into(),
        });
    }
    if timeout == 0 {
        return Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }

    Ok(DeviceConfig::new(resolved.host.clone())
        .with_port(port)
        .with_timeout(Duration::from_secs(timeout)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn config_with_devices() -> Config {
        let mut cfg = Config::default();
        cfg.devices
            .insert("living-room".into(), DeviceProfile::new("192.168.1.40"));
        cfg.devices.insert(
            "bedroom".into(),
            DeviceProfile {
                host: "roku-bedroom.lan".into(),
                port: Some(9060),
                timeout: Some(2),
            },
        );
        cfg.default_device = Some("living-room".into());
        cfg
    }

    #[test]
    fn flag_beats_env_and_profile() {
        let cfg = config_with_devices();
        let overrides = Overrides {
            ip: Some("10.0.0.5".into()),
            device: Some("bedroom".into()),
            ..Overrides::default()
        };
        let resolved = resolve_configured_host(&cfg, &overrides, Some("10.0.0.9"))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.host, "10.0.0.5");
        assert_eq!(resolved.source, HostSource::Flag);
    }

    #[test]
    fn env_beats_profile() {
        let cfg = config_with_devices();
        let resolved = resolve_configured_host(&cfg, &Overrides::default(), Some("10.0.0.9"))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.host, "10.0.0.9");
        assert_eq!(resolved.source, HostSource::Env);
    }

    #[test]
    fn empty_flag_and_env_are_skipped() {
        let cfg = config_with_devices();
        let overrides = Overrides {
            ip: Some(String::new()),
            ..Overrides::default()
        };
        let resolved = resolve_configured_host(&cfg, &overrides, Some("  "))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.source, HostSource::Profile("living-room".into()));
        assert_eq!(resolved.host, "192.168.1.40");
    }

    #[test]
    fn explicit_device_beats_default_device() {
        let cfg = config_with_devices();
        let overrides = Overrides {
            device: Some("bedroom".into()),
            ..Overrides::default()
        };
        let resolved = resolve_configured_host(&cfg, &overrides, None)
            .unwrap()
            .unwrap();
        assert_eq!(resolved.host, "roku-bedroom.lan");
    }

    #[test]
    fn nothing_configured_defers_to_discovery() {
        let cfg = Config::default();
        assert_eq!(
            resolve_configured_host(&cfg, &Overrides::default(), None).unwrap(),
            None
        );
    }

    #[test]
    fn unknown_device_lists_available() {
        let cfg = config_with_devices();
        let overrides = Overrides {
            device: Some("garage".into()),
            ..Overrides::default()
        };
        let err = resolve_configured_host(&cfg, &overrides, None).unwrap_err();
        match err {
            ConfigError::UnknownDevice { name, available } => {
                assert_eq!(name, "garage");
                assert_eq!(available, "bedroom, living-room");
            }
            other => panic!("expected UnknownDevice, got {other:?}"),
        }
    }

    #[test]
    fn first_discovered_host_takes_first_location() {
        let urls = [
            Url::parse("http://192.168.1.134:8060/").unwrap(),
            Url::parse("http://192.168.1.20:8060/").unwrap(),
        ];
        let resolved = first_discovered_host(&urls).unwrap();
        assert_eq!(resolved.host, "192.168.1.134");
        assert_eq!(resolved.source, HostSource::Discovery);
        assert_eq!(first_discovered_host(&[]), None);
    }

    #[test]
    fn device_config_layers_port_and_timeout() {
        let cfg = config_with_devices();
        let resolved = resolve_configured_host(
            &cfg,
            &Overrides {
                device: Some("bedroom".into()),
                ..Overrides::default()
            },
            None,
        )
        .unwrap()
        .unwrap();

        let from_profile = device_config(&cfg, &Overrides::default(), &resolved).unwrap();
        assert_eq!(from_profile.port, 9060);
        assert_eq!(from_profile.timeout, Duration::from_secs(2));

        let overridden = device_config(
            &cfg,
            &Overrides {
                timeout: Some(9),
                ..Overrides::default()
            },
            &resolved,
        )
        .unwrap();
        assert_eq!(overridden.port, 9060);
        assert_eq!(overridden.timeout, Duration::from_secs(9));

        let flag_host = ResolvedHost {
            host: "10.0.0.5".into(),
            source: HostSource::Flag,
            profile: None,
        };
        let defaults = device_config(&cfg, &Overrides::default(), &flag_host).unwrap();
        assert_eq!(defaults.port, DEFAULT_PORT);
        assert_eq!(defaults.timeout, Duration::from_secs(5));
    }

    #[test]
    fn save_then_load_round_trips_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = config_with_devices();
        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.default_device.as_deref(), Some("living-room"));
        assert_eq!(loaded.devices, cfg.devices);
        assert_eq!(loaded.defaults.timeout, 5);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.devices.is_empty());
        assert_eq!(loaded.defaults.port, DEFAULT_PORT);
        assert_eq!(loaded.defaults.timeout, 5);
    }

    #[test]
    fn zero_timeout_or_port_is_rejected() {
        let mut cfg = config_with_devices();
        let flag_host = ResolvedHost {
            host: "10.0.0.5".into(),
            source: HostSource::Flag,
            profile: None,
        };

        let zero_flag = Overrides {
            timeout: Some(0),
            ..Overrides::default()
        };
        let err = device_config(&cfg, &zero_flag, &flag_host).unwrap_err();
        assert!(
            matches!(&err, ConfigError::Validation { field, .. } if field == "timeout"),
            "{err:?}"
        );

        let zero_port = Overrides {
            port: Some(0),
            ..Overrides::default()
        };
        let err = device_config(&cfg, &zero_port, &flag_host).unwrap_err();
        assert!(
            matches!(&err, ConfigError::Validation { field, .. } if field == "port"),
            "{err:?}"
        );

        cfg.defaults.timeout = 0;
        assert!(device_config(&cfg, &Overrides::default(), &flag_host).is_err());

        // A profile's own timeout still wins over a zero default.
        let bedroom = ResolvedHost {
            host: "roku-bedroom.lan".into(),
            source: HostSource::Profile("bedroom".into()),
            profile: cfg.devices.get("bedroom").cloned(),
        };
        let ok = device_config(&cfg, &Overrides::default(), &bedroom).unwrap();
        assert_eq!(ok.timeout, Duration::from_secs(2));
    }

    #[test]
    fn stored_config_keeps_broken_files_as_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_device = \"den\"\n\n[devices.den]\nhost = \"10.0.0.3\"\ntimeout = \"ten\"\n",
        )
        .unwrap();

        assert!(matches!(
            load_stored_config_from(&path),
            Err(ConfigError::Figment(_))
        ));
    }

    #[test]
    fn stored_config_reads_only_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        save_config_to(&config_with_devices(), &path).unwrap();

        let stored = load_stored_config_from(&path).unwrap();
        assert_eq!(stored.default_device.as_deref(), Some("living-room"));
        assert_eq!(stored.devices.len(), 2);
        assert_eq!(stored.defaults.timeout, 5);
    }
}
