//! Shared types, errors, and configuration for Centavo.
//!
//! This crate provides common types used across all other crates:
//! - `Amount`, a non-negative cent count with decimal precision
//! - Error types for the fallible parsing and configuration paths
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MaskError, MaskResult};
pub use types::Amount;
