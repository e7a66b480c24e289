//! Remote-view keybindings: terminal keys → key table names.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::ViewId;

/// What a key does while the remote view has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteInput {
    /// Press this key table entry on the device.
    Key(&'static str),
    /// Switch to a text view.
    Open(ViewId),
    Quit,
}

/// Help rows shown in the remote panel: (terminal keys, description).
pub const HINTS: &[(&str, &str)] = &[
    ("arrows", "move"),
    ("enter", "select"),
    ("space", "play/pause"),
    ("bksp", "backspace"),
    ("* 8", "info (options)"),
    ("h", "home"),
    ("b", "back"),
    ("+ = / -", "volume up/down"),
    ("< , / > .", "reverse/forward"),
    ("p", "power on/off"),
    ("i", "insert text"),
    ("a", "launch app"),
    ("q", "quit"),
];

/// Map a key event in the remote view.
///
/// Shifted punctuation (`+`, `*`, `<`, `>`) arrives with SHIFT set, so only
/// CONTROL is treated as a modifier.
pub fn remote_input(key: KeyEvent) -> Option<RemoteInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(RemoteInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up => RemoteInput::Key("up"),
        KeyCode::Down => RemoteInput::Key("down"),
        KeyCode::Left => RemoteInput::Key("left"),
        KeyCode::Right => RemoteInput::Key("right"),
        KeyCode::Enter => RemoteInput::Key("select"),
        KeyCode::Backspace => RemoteInput::Key("backspace"),
        KeyCode::Char(' ') => RemoteInput::Key("play"),
        KeyCode::Char('*' | '8') => RemoteInput::Key("info"),
        KeyCode::Char('h') => RemoteInput::Key("home"),
        KeyCode::Char('b') => RemoteInput::Key("back"),
        KeyCode::Char('+' | '=') => RemoteInput::Key("volume_up"),
        KeyCode::Char('-') => RemoteInput::Key("volume_down"),
        KeyCode::Char('<' | ',') => RemoteInput::Key("reverse"),
        KeyCode::Char('>' | '.') => RemoteInput::Key("forward"),
        KeyCode::Char('p') => RemoteInput::Key("power"),
        KeyCode::Char('i') => RemoteInput::Open(ViewId::Insert),
        KeyCode::Char('a') => RemoteInput::Open(ViewId::Apps),
        KeyCode::Char('q') => RemoteInput::Quit,
        _ => return None,
    };
    Some(input)
}

/// The hint row that a key table name belongs to, for highlighting.
pub fn hint_for(name: &str) -> Option<usize> {
    let desc = match name {
        "up" | "down" | "left" | "right" => "move",
        "select" => "select",
        "play" => "play/pause",
        "backspace" => "backspace",
        "info" => "info (options)",
        "home" => "home",
        "back" => "back",
        "volume_up" | "volume_down" => "volume up/down",
        "reverse" | "forward" => "reverse/forward",
        "power" => "power on/off",
        _ => return None,
    };
    HINTS.iter().position(|(_, d)| *d == desc)
}
