//! VLC HTTP interface commands and the hotkey table that triggers them.

use std::collections::BTreeSet;
use std::fmt;

/// A command understood by `requests/status.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    PlayPause,
    Stop,
    /// Relative seek in seconds.
    Seek(i32),
    /// Relative volume change.
    Volume(i32),
    Next,
    Previous,
}

impl PlayerCommand {
    /// Value of the `command` query parameter.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::PlayPause => "pl_pause",
            PlayerCommand::Stop => "pl_stop",
            PlayerCommand::Seek(_) => "seek",
            PlayerCommand::Volume(_) => "volume",
            PlayerCommand::Next => "pl_next",
            PlayerCommand::Previous => "pl_previous",
        }
    }

    /// Value of the `val` query parameter, always signed.
    pub fn value(&self) -> Option<String> {
        match self {
            PlayerCommand::Seek(delta) | PlayerCommand::Volume(delta) => Some(format!("{:+}", delta)),
            _ => None,
        }
    }

    /// Query pairs for the request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("command", self.name().to_string())];
        if let Some(val) = self.value() {
            pairs.push(("val", val));
        }
        pairs
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(val) => write!(f, "{} (val={})", self.name(), val),
            None => f.write_str(self.name()),
        }
    }
}

/// What a chord does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Command(PlayerCommand),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub chord: &'static str,
    pub description: &'static str,
    pub action: HotkeyAction,
}

const fn bind(chord: &'static str, description: &'static str, action: HotkeyAction) -> HotkeyBinding {
    HotkeyBinding {
        chord,
        description,
        action,
    }
}

/// Global shortcuts for controlling the player.
pub const HOTKEY_BINDINGS: &[HotkeyBinding] = &[
    bind("ctrl+alt+space", "Play/Pause", HotkeyAction::Command(PlayerCommand::PlayPause)),
    bind("ctrl+alt+s", "Stop", HotkeyAction::Command(PlayerCommand::Stop)),
    bind("ctrl+alt+left", "Seek -10 seconds", HotkeyAction::Command(PlayerCommand::Seek(-10))),
    bind("ctrl+alt+right", "Seek +10 seconds", HotkeyAction::Command(PlayerCommand::Seek(10))),
    bind("ctrl+alt+shift+left", "Seek -60 seconds", HotkeyAction::Command(PlayerCommand::Seek(-60))),
    bind("ctrl+alt+shift+right", "Seek +60 seconds", HotkeyAction::Command(PlayerCommand::Seek(60))),
    bind("ctrl+alt+up", "Volume +20", HotkeyAction::Command(PlayerCommand::Volume(20))),
    bind("ctrl+alt+down", "Volume -20", HotkeyAction::Command(PlayerCommand::Volume(-20))),
    bind("ctrl+alt+n", "Next track", HotkeyAction::Command(PlayerCommand::Next)),
    bind("ctrl+alt+p", "Previous track", HotkeyAction::Command(PlayerCommand::Previous)),
    bind("ctrl+alt+q", "Quit", HotkeyAction::Quit),
];

/// Split a chord into its (sorted modifiers, key) form.
fn normalize(chord: &str) -> Option<(BTreeSet<String>, String)> {
    let mut parts: Vec<String> = chord
        .split('+')
        .map(|p| p.trim().to_lowercase())
        .collect();
    let key = parts.pop().filter(|k| !k.is_empty())?;
    if parts.iter().any(|m| m.is_empty()) {
        return None;
    }
    Some((parts.into_iter().collect(), key))
}

/// Look up a chord; modifier order and case are ignored.
pub fn find_binding(chord: &str) -> Option<&'static HotkeyBinding> {
    let wanted = normalize(chord)?;
    HOTKEY_BINDINGS
        .iter()
        .find(|binding| normalize(binding.chord).as_ref() == Some(&wanted))
}
