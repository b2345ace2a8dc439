//! One masked field driven by stdin commands.

use std::cell::RefCell;
use std::rc::Rc;

use centavo_core::field::{
    CurrencyField, Key, KeyDisposition, KeyEvent, Scheduler, TextBuffer, ValueChanged,
};
use centavo_core::mask::{format_brl, parse_currency};
use centavo_shared::MaskError;
use serde_json::json;
use tracing::debug;

use crate::command::Command;

/// A masked field on an in-memory buffer, plus pending notifications.
pub struct Session {
    field: CurrencyField<TextBuffer>,
    buffer: Rc<RefCell<TextBuffer>>,
    events: Rc<RefCell<Vec<ValueChanged>>>,
    currency_symbol: String,
}

impl Session {
    /// Attaches a field seeded with `seed`.
    pub fn new(scheduler: Rc<dyn Scheduler>, seed: &str, currency_symbol: String) -> Self {
        let buffer = Rc::new(RefCell::new(TextBuffer::new(seed)));
        let mut field = CurrencyField::attach(Rc::clone(&buffer), scheduler);

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        field.subscribe(move |event| sink.borrow_mut().push(*event));

        Self {
            field,
            buffer,
            events,
            currency_symbol,
        }
    }

    /// Text currently shown in the field.
    pub fn text(&self) -> String {
        self.field.text()
    }

    /// Runs one command and returns the JSON lines to print.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        let mut out = Vec::new();

        match command {
            Command::Key(event) => {
                if !self.press(&event) {
                    out.push(json!({ "suppressed": key_label(&event.key) }).to_string());
                }
            }
            Command::Type(text) => {
                for c in text.chars() {
                    self.press(&KeyEvent::new(Key::Char(c)));
                }
            }
            Command::Paste(text) => {
                self.buffer.borrow_mut().paste(&text);
                self.field.handle_input();
            }
            Command::Focus => self.field.handle_focus(),
            Command::Blur => {
                self.field.handle_blur();
            }
            Command::Set(value) => match parse_currency(&value) {
                Ok(value) => {
                    self.field.set_value(value);
                }
                Err(err) => out.push(error_line(&err)),
            },
            Command::Show => out.push(
                json!({
                    "display": self.text(),
                    "numericValue": self.field.numeric_value(),
                    "formatted": format_brl(self.field.numeric_value(), &self.currency_symbol),
                    "selected": self.buffer.borrow().is_all_selected(),
                })
                .to_string(),
            ),
            Command::Quit => {}
        }

        for event in self.events.borrow_mut().drain(..) {
            out.push(json!({ "event": "currencyChanged", "detail": event }).to_string());
        }
        out.push(json!({ "display": self.text() }).to_string());
        out
    }

    /// Keydown, platform edit, input event. Returns false if suppressed.
    fn press(&mut self, event: &KeyEvent) -> bool {
        if self.field.handle_key_down(event) == KeyDisposition::Suppress {
            return false;
        }
        if self.buffer.borrow_mut().apply_key(event) {
            self.field.handle_input();
        } else {
            debug!(key = ?event.key, "Keystroke accepted without edit");
        }
        true
    }
}

/// Renders an error as a JSON line.
pub fn error_line(err: &MaskError) -> String {
    json!({ "error": err.error_code(), "message": err.to_string() }).to_string()
}

fn key_label(key: &Key) -> String {
    match key {
        Key::Char(c) => c.to_string(),
        Key::Named(name) => name.clone(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use centavo_core::field::DeferredQueue;

    fn session(seed: &str) -> (Session, Rc<DeferredQueue>) {
        let queue = Rc::new(DeferredQueue::new());
        let session = Session::new(Rc::clone(&queue) as Rc<dyn Scheduler>, seed, "R$".into());
        (session, queue)
    }

    fn run(session: &mut Session, line: &str) -> Vec<String> {
        session.execute(line.parse().unwrap())
    }

    #[test]
    fn test_typing_emits_events_and_display() {
        let (mut session, _) = session("");
        let out = run(&mut session, "type 12");
        assert_eq!(
            out,
            vec![
                r#"{"detail":{"numericValue":0.01},"event":"currencyChanged"}"#,
                r#"{"detail":{"numericValue":0.12},"event":"currencyChanged"}"#,
                r#"{"display":"0,12"}"#,
            ]
        );
    }

    #[test]
    fn test_suppressed_key_reported() {
        let (mut session, _) = session("5,00");
        let out = run(&mut session, "a");
        assert_eq!(out[0], r#"{"suppressed":"a"}"#);
        assert_eq!(session.text(), "5,00");
    }

    #[test]
    fn test_focus_then_type_replaces() {
        let (mut session, queue) = session("12,34");
        run(&mut session, "focus");
        queue.run_pending();
        run(&mut session, "7");
        assert_eq!(session.text(), "0,07");
    }

    #[test]
    fn test_set_accepts_display_and_machine_values() {
        let (mut session, _) = session("");
        run(&mut session, "set 1.234,56");
        assert_eq!(session.text(), "1.234,56");
        run(&mut session, "set 99.9");
        assert_eq!(session.text(), "99,90");
    }

    #[test]
    fn test_set_invalid_reports_error() {
        let (mut session, _) = session("");
        let out = run(&mut session, "set 1,2,3");
        assert!(out[0].contains("INVALID_AMOUNT"));
        assert_eq!(session.text(), "0,00");
    }

    #[test]
    fn test_show_includes_filter_output() {
        let (mut session, _) = session("1500");
        let out = run(&mut session, "show");
        let shown: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(shown["display"], "1.500,00");
        assert_eq!(shown["formatted"], "R$ 1.500,00");
        assert_eq!(shown["selected"], false);
    }

    #[test]
    fn test_blur_normalizes() {
        let (mut session, _) = session("");
        run(&mut session, "Ctrl+A");
        let out = run(&mut session, "paste 7");
        assert_eq!(out.last().unwrap(), r#"{"display":"0,07"}"#);
        run(&mut session, "blur");
        assert_eq!(session.text(), "0,07");
    }
}
