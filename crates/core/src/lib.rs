//! Core currency mask logic for Centavo.
//!
//! This crate contains the pure masking rules with ZERO platform dependencies.
//! Hosts provide the text surface and the event-loop scheduler.
//!
//! # Modules
//!
//! - `mask` - Conversions between typed digit streams, amounts, and display strings
//! - `field` - Per-field controller, keystroke filter, and deferred scheduling

pub mod field;
pub mod mask;
