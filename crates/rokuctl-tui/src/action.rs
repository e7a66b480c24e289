//! All possible UI actions. Actions are the sole mechanism for state mutation.

use rokuctl_api::App as DeviceApp;

use crate::view::ViewId;

/// Status line severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient message in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ───────────────────────────────────────────────────
    Quit,
    Tick,

    // ── Navigation ──────────────────────────────────────────────────
    SwitchView(ViewId),

    // ── Device commands (awaited by the app loop) ───────────────────
    /// Press a key from the key table.
    PressKey(&'static str),
    /// Send text as literal key presses, then return to the remote.
    SendText(String),
    /// Launch the first app whose name contains the query.
    LaunchApp(String),

    // ── Results ─────────────────────────────────────────────────────
    /// Installed apps fetched for the apps view.
    AppsLoaded(Vec<DeviceApp>),
    Notify(Notification),
}
