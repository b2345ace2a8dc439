//! Keystroke filter for masked currency fields.
//!
//! Only digits, navigation/control keys, and the clipboard/select-all
//! shortcuts reach the field. Everything else is suppressed before the
//! platform edits the text.

use std::str::FromStr;

use centavo_shared::MaskError;

/// A platform key, identified by its logical key value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Enter / Return.
    Enter,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Any other named key (`F5`, `PageUp`, `Shift`, ...).
    Named(String),
}

/// Modifier keys held during a keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    /// Control.
    pub ctrl: bool,
    /// Command / Meta.
    pub meta: bool,
    /// Alt / Option.
    pub alt: bool,
    /// Shift.
    pub shift: bool,
}

/// A key-down event delivered to a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key pressed.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

/// Whether a keystroke may reach the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDisposition {
    /// Let the platform apply the keystroke.
    Accept,
    /// Swallow the keystroke; the field content must not change.
    Suppress,
}

impl KeyEvent {
    /// Creates an event without modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a Ctrl+`c` event.
    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    /// Creates a Cmd+`c` event.
    #[must_use]
    pub fn meta(c: char) -> Self {
        Self {
            key: Key::Char(c),
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::default()
            },
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Decides whether a keystroke may reach a masked currency field.
///
/// Digits are matched on the logical key value, so numeric-pad digits that
/// report `"0"`..`"9"` are accepted; non-ASCII digits are not.
#[must_use]
pub fn filter_key(event: &KeyEvent) -> KeyDisposition {
    match &event.key {
        Key::Backspace
        | Key::Delete
        | Key::Tab
        | Key::Escape
        | Key::Enter
        | Key::ArrowLeft
        | Key::ArrowRight
        | Key::ArrowUp
        | Key::ArrowDown
        | Key::Home
        | Key::End => KeyDisposition::Accept,
        Key::Char(c) => {
            let shortcut = (event.modifiers.ctrl || event.modifiers.meta)
                && matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'v' | 'x');
            if shortcut || c.is_ascii_digit() {
                KeyDisposition::Accept
            } else {
                KeyDisposition::Suppress
            }
        }
        Key::Named(_) => KeyDisposition::Suppress,
    }
}

impl FromStr for Key {
    type Err = MaskError;

    /// Parses a logical key value such as `"7"`, `"Backspace"` or `"F5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }

        match s {
            "Backspace" => Ok(Self::Backspace),
            "Delete" | "Del" => Ok(Self::Delete),
            "Tab" => Ok(Self::Tab),
            "Escape" | "Esc" => Ok(Self::Escape),
            "Enter" | "Return" => Ok(Self::Enter),
            "ArrowLeft" | "Left" => Ok(Self::ArrowLeft),
            "ArrowRight" | "Right" => Ok(Self::ArrowRight),
            "ArrowUp" | "Up" => Ok(Self::ArrowUp),
            "ArrowDown" | "Down" => Ok(Self::ArrowDown),
            "Home" => Ok(Self::Home),
            "End" => Ok(Self::End),
            "Space" => Ok(Self::Char(' ')),
            _ if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Ok(Self::Named(s.to_string()))
            }
            _ => Err(MaskError::UnknownKey(s.to_string())),
        }
    }
}

impl FromStr for KeyEvent {
    type Err = MaskError;

    /// Parses chords such as `"Ctrl+V"`, `"Cmd+a"` or a bare key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut modifiers = Modifiers::default();
        let mut rest = s;

        // A lone "+" is the plus key, not an empty chord.
        while let Some((prefix, tail)) = rest.split_once('+').filter(|(_, t)| !t.is_empty()) {
            match prefix.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "cmd" | "meta" | "super" => modifiers.meta = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => return Err(MaskError::UnknownKey(s.to_string())),
            }
            rest = tail;
        }

        Ok(Self {
            key: rest.parse()?,
            modifiers,
        })
    }
}
