//! Static key table: symbolic command names → ECP key tokens.
//!
//! The table is compile-time data. Literal text entry is deliberately absent;
//! it is a per-character protocol action handled by
//! [`EcpClient::send_literal`](crate::EcpClient::send_literal).

/// `(name, token)` pairs, grouped the way the device documentation groups them.
pub const KEYS: &[(&str, &str)] = &[
    // Standard keys
    ("home", "Home"),
    ("reverse", "Rev"),
    ("forward", "Fwd"),
    ("play", "Play"),
    ("select", "Select"),
    ("left", "Left"),
    ("right", "Right"),
    ("down", "Down"),
    ("up", "Up"),
    ("back", "Back"),
    ("replay", "InstantReplay"),
    ("info", "Info"),
    ("backspace", "Backspace"),
    ("search", "Search"),
    ("enter", "Enter"),
    // Devices that support "Find Remote"
    ("find_remote", "FindRemote"),
    // Roku TV
    ("volume_down", "VolumeDown"),
    ("volume_up", "VolumeUp"),
    ("volume_mute", "VolumeMute"),
    // Roku TV, while on a tuner channel
    ("channel_up", "ChannelUp"),
    ("channel_down", "ChannelDown"),
    // Roku TV input selection
    ("input_tuner", "InputTuner"),
    ("input_hdmi1", "InputHDMI1"),
    ("input_hdmi2", "InputHDMI2"),
    ("input_hdmi3", "InputHDMI3"),
    ("input_hdmi4", "InputHDMI4"),
    ("input_av1", "InputAV1"),
    // Devices that can be switched on/off
    ("power", "Power"),
];

/// Resolve a symbolic command name to its protocol token.
pub fn lookup(name: &str) -> Option<&'static str> {
    KEYS.iter()
        .find(|(key, _)| *key == name)
        .map(|(_, token)| *token)
}

/// All symbolic command names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    KEYS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lookup_known_names() {
        assert_eq!(lookup("volume_up"), Some("VolumeUp"));
        assert_eq!(lookup("replay"), Some("InstantReplay"));
        assert_eq!(lookup("reverse"), Some("Rev"));
        assert_eq!(lookup("input_hdmi3"), Some("InputHDMI3"));
        assert_eq!(lookup("power"), Some("Power"));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(lookup("Home"), None);
        assert_eq!(lookup("home "), None);
        assert_eq!(lookup("literal"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn names_are_unique_and_complete() {
        let all: Vec<_> = names().collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), KEYS.len());
        assert_eq!(unique.len(), all.len());
        for name in all {
            assert!(lookup(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn table_covers_every_key_group() {
        for name in [
            "up", "down", "left", "right", "select", "back", "home", // navigation
            "play", "reverse", "forward", "info", "replay", // media
            "channel_up", "channel_down", "input_tuner", "input_av1", // tuner
            "volume_up", "volume_down", "volume_mute", // volume
            "power",
        ] {
            assert!(lookup(name).is_some(), "missing {name}");
        }
    }
}
