//! Line commands accepted on stdin.

use std::str::FromStr;

use centavo_core::field::KeyEvent;
use centavo_shared::MaskError;

/// One stdin command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A single keystroke, e.g. `7`, `Backspace`, `Ctrl+A`.
    Key(KeyEvent),
    /// Type each character of the argument as a keystroke.
    Type(String),
    /// Paste text into the field, then fire an input event.
    Paste(String),
    /// Focus the field.
    Focus,
    /// Blur the field.
    Blur,
    /// Programmatic write of a value (`1234.56`, `1.234,56`, `R$ 10,00`).
    Set(String),
    /// Print the field state.
    Show,
    /// Stop reading input.
    Quit,
}

impl FromStr for Command {
    type Err = MaskError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, arg) = match line.split_once(' ') {
            Some((word, arg)) => (word, Some(arg.trim())),
            None => (line, None),
        };

        match (word.to_ascii_lowercase().as_str(), arg) {
            ("focus", None) => Ok(Self::Focus),
            ("blur", None) => Ok(Self::Blur),
            ("show", None) => Ok(Self::Show),
            ("quit" | "exit", None) => Ok(Self::Quit),
            ("type", Some(text)) => Ok(Self::Type(text.to_string())),
            ("paste", Some(text)) => Ok(Self::Paste(text.to_string())),
            ("set", Some(value)) => Ok(Self::Set(value.to_string())),
            (_, None) => line.parse().map(Self::Key),
            _ => Err(MaskError::UnknownKey(line.to_string())),
        }
    }
}
