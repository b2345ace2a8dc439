//! Stateful controller binding the mask to one input field.

use std::cell::RefCell;
use std::rc::Rc;

use centavo_shared::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::keys::{KeyDisposition, KeyEvent, filter_key};
use super::scheduler::Scheduler;
use super::surface::FieldSurface;
use crate::mask::{
    MaskOutput, format_amount, on_focus_lost, on_raw_input, parse_display, render_seed,
};

/// Notification emitted whenever the field's numeric value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueChanged {
    /// Canonical numeric value of the field.
    #[serde(with = "rust_decimal::serde::float")]
    pub numeric_value: Decimal,
}

/// Callback receiving value-changed notifications.
pub type Observer = Box<dyn FnMut(&ValueChanged)>;

/// Currency mask attached to a single input field.
///
/// Every keystroke collapses the field to "all digits are cents"; blur
/// re-normalizes whatever was left behind. User edits and programmatic
/// writes emit identical [`ValueChanged`] notifications.
pub struct CurrencyField<S: FieldSurface> {
    surface: Rc<RefCell<S>>,
    scheduler: Rc<dyn Scheduler>,
    observers: Vec<Observer>,
}

impl<S: FieldSurface + 'static> CurrencyField<S> {
    /// Attaches the mask, normalizing whatever text the field already holds.
    ///
    /// Empty fields show `0,00`; pre-populated values may be display strings
    /// or plain machine numbers.
    pub fn attach(surface: Rc<RefCell<S>>, scheduler: Rc<dyn Scheduler>) -> Self {
        {
            let mut field = surface.borrow_mut();
            let seed = field.text();
            let rendered = render_seed(&seed);
            debug!(seed = %seed, display = %rendered, "Currency mask attached");
            field.set_text(&rendered);
        }

        Self {
            surface,
            scheduler,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for value-changed notifications.
    pub fn subscribe(&mut self, observer: impl FnMut(&ValueChanged) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the shared handle to the underlying surface.
    pub fn surface(&self) -> &Rc<RefCell<S>> {
        &self.surface
    }

    /// Returns the text currently shown.
    pub fn text(&self) -> String {
        self.surface.borrow().text()
    }

    /// Current numeric value, read back from the displayed text.
    pub fn numeric_value(&self) -> Decimal {
        parse_display(&self.text())
    }

    /// Decides whether a keystroke may reach the field.
    pub fn handle_key_down(&self, event: &KeyEvent) -> KeyDisposition {
        let disposition = filter_key(event);
        if disposition == KeyDisposition::Suppress {
            trace!(key = ?event.key, "Keystroke suppressed");
        }
        disposition
    }

    /// Re-masks the field after the platform changed its text.
    pub fn handle_input(&mut self) -> MaskOutput {
        let raw = self.text();
        let output = on_raw_input(&raw);
        debug!(raw = %raw, display = %output.display, "Currency input masked");

        self.surface.borrow_mut().set_text(&output.display);
        self.notify(output.numeric_value());
        output
    }

    /// Schedules selection of the whole text once native focus handling is done.
    pub fn handle_focus(&self) {
        let surface = Rc::clone(&self.surface);
        self.scheduler
            .defer(Box::new(move || surface.borrow_mut().select_all()));
    }

    /// Re-normalizes the field when it loses focus.
    pub fn handle_blur(&mut self) -> String {
        let raw = self.text();
        let rendered = on_focus_lost(&raw);
        debug!(raw = %raw, display = %rendered, "Currency field normalized on blur");

        self.surface.borrow_mut().set_text(&rendered);
        rendered
    }

    /// Writes a value programmatically, notifying observers like a user edit.
    ///
    /// The value is rounded to cents; negative values clamp to zero.
    pub fn set_value(&mut self, value: Decimal) -> String {
        let amount = Amount::from_decimal(value);
        let rendered = format_amount(amount);
        debug!(value = %value, display = %rendered, "Currency value set");

        self.surface.borrow_mut().set_text(&rendered);
        self.notify(amount.to_decimal());
        rendered
    }

    fn notify(&mut self, numeric_value: Decimal) {
        let event = ValueChanged { numeric_value };
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

impl<S: FieldSurface> std::fmt::Debug for CurrencyField<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyField")
            .field("text", &self.surface.borrow().text())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
