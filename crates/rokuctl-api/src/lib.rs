// rokuctl-api: Async Rust client for the Roku External Control Protocol (ECP)
//
// One `EcpClient` per device, built from an immutable `DeviceConfig`.
// Key presses resolve through the static table in `keys`; app queries decode
// the device's XML payloads; `discovery` locates devices with an SSDP sweep.

pub mod apps;
pub mod client;
pub mod config;
pub mod discovery;
pub mod error;
pub mod keypress;
pub mod keys;
pub mod models;
pub mod transport;

pub use client::EcpClient;
pub use config::{DEFAULT_PORT, DEFAULT_TIMEOUT, DeviceConfig};
pub use discovery::{Discovery, find_devices};
pub use error::Error;
pub use models::{App, AppList};
