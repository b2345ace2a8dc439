//! Platform access to a field's editable text.

use super::keys::{Key, KeyEvent};

/// Read/write/select access to one input field on some platform.
///
/// The mask core only reads and replaces the whole text; it never inspects
/// caret or selection state.
pub trait FieldSurface {
    /// Returns the current text content.
    fn text(&self) -> String;

    /// Replaces the entire text content.
    fn set_text(&mut self, text: &str);

    /// Selects the entire text content.
    fn select_all(&mut self);
}

/// In-memory text field with the caret pinned to the end.
///
/// Emulates the platform edits a browser applies after an accepted
/// keystroke: typing replaces an all-selection or appends, Backspace and
/// Delete clear an all-selection or remove the last character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    all_selected: bool,
}

impl TextBuffer {
    /// Creates a buffer holding `text`, with nothing selected.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            all_selected: false,
        }
    }

    /// Returns true if the whole text is selected.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    /// Applies the platform edit for an accepted keystroke.
    ///
    /// Returns true if the text changed (an input event would fire).
    pub fn apply_key(&mut self, event: &KeyEvent) -> bool {
        let before = self.text.clone();
        match &event.key {
            Key::Char(c) if !(event.modifiers.ctrl || event.modifiers.meta) => {
                if self.all_selected {
                    self.text.clear();
                }
                self.text.push(*c);
            }
            Key::Char(c) if c.eq_ignore_ascii_case(&'a') => {
                self.all_selected = true;
                return false;
            }
            Key::Char(c) if c.eq_ignore_ascii_case(&'x') && self.all_selected => {
                self.text.clear();
            }
            Key::Backspace | Key::Delete => {
                if self.all_selected {
                    self.text.clear();
                } else {
                    self.text.pop();
                }
            }
            _ => {}
        }
        self.all_selected = false;
        self.text != before
    }

    /// Pastes `clip` at the caret, replacing an all-selection.
    pub fn paste(&mut self, clip: &str) {
        if self.all_selected {
            self.text.clear();
        }
        self.text.push_str(clip);
        self.all_selected = false;
    }
}

impl FieldSurface for TextBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.all_selected = false;
    }

    fn select_all(&mut self) {
        self.all_selected = true;
    }
}
