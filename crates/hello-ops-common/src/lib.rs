//! Common types, errors, and configuration for hello-ops.
//!
//! - Error types using `thiserror`
//! - Configuration structures for the demo inputs

pub mod config;
pub mod error;

pub use config::{DemoConfig, MAX_TEXT_CAPACITY, MathConfig, TextConfig};
pub use error::OpsError;
