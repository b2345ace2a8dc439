//! Per-field controller, keystroke filter, and deferred scheduling.

pub mod controller;
pub mod keys;
pub mod scheduler;
pub mod surface;


pub use controller::{CurrencyField, Observer, ValueChanged};
pub use keys::{Key, KeyDisposition, KeyEvent, Modifiers, filter_key};
pub use scheduler::{DeferredQueue, Scheduler, Task};
pub use surface::{FieldSurface, TextBuffer};
