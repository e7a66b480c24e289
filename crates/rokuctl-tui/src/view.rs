//! View identifiers.

use std::fmt;

/// The three panels of the remote. Only one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    /// Key help; every key press goes to the device.
    #[default]
    Remote,
    /// Text entry sent as literal key presses.
    Insert,
    /// App name entry, launched by substring match.
    Apps,
}

impl ViewId {
    pub const ALL: [ViewId; 3] = [Self::Remote, Self::Insert, Self::Apps];

    pub fn label(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Insert => "insert",
            Self::Apps => "apps",
        }
    }

    /// Views that capture typed characters instead of sending keys.
    pub fn takes_text(self) -> bool {
        matches!(self, Self::Insert | Self::Apps)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
