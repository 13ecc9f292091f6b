//! Configuration structures for hello-ops.
//!
//! - [`DemoConfig`]: Top-level configuration
//! - [`MathConfig`]: Operands for the arithmetic section
//! - [`TextConfig`]: Input text and buffer capacity for the string section
//!
//! The binary always runs with [`DemoConfig::default`], which reproduces the
//! fixed demo inputs. TOML parsing is available for library callers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::OpsError;

/// Largest text buffer, terminator included.
pub const MAX_TEXT_CAPACITY: usize = 64 * 1024;

/// Top-level demo configuration.
///
/// # Example
///
/// ```toml
/// [math]
/// lhs = 10
/// rhs = 5
///
/// [text]
/// value = "Hello Android"
/// capacity = 32
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Arithmetic operands.
    #[serde(default)]
    pub math: MathConfig,

    /// String operation input.
    #[serde(default)]
    pub text: TextConfig,
}

/// Operands for the arithmetic section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MathConfig {
    /// Left operand.
    #[serde(default = "defaults::lhs")]
    pub lhs: i32,

    /// Right operand.
    #[serde(default = "defaults::rhs")]
    pub rhs: i32,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            lhs: defaults::lhs(),
            rhs: defaults::rhs(),
        }
    }
}

/// Input for the string section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextConfig {
    /// Text placed in the buffer.
    #[serde(default = "defaults::text")]
    pub value: String,

    /// Buffer capacity in bytes, including the terminator.
    ///
    /// When unset the buffer is sized exactly to the text plus terminator.
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            value: defaults::text(),
            capacity: None,
        }
    }
}

impl TextConfig {
    /// Effective buffer capacity.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.unwrap_or(self.value.len() + 1)
    }
}

impl DemoConfig {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed or fails [`validate`](Self::validate).
    pub fn from_toml(content: &str) -> Result<Self, OpsError> {
        let config: Self = toml::from_str(content).map_err(|e| OpsError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        debug!(?config, "Parsed demo configuration");
        Ok(config)
    }

    /// Check that the text has no zero byte and fits its buffer.
    pub fn validate(&self) -> Result<(), OpsError> {
        if let Some(position) = self.text.value.bytes().position(|b| b == 0) {
            return Err(OpsError::invalid_config(format!(
                "text.value contains a zero byte at {position}"
            )));
        }
        let capacity = self.text.effective_capacity();
        if capacity > MAX_TEXT_CAPACITY {
            return Err(OpsError::invalid_config(format!(
                "text buffer of {capacity} bytes exceeds maximum of {MAX_TEXT_CAPACITY}"
            )));
        }
        if self.text.capacity.is_none() {
            return Ok(());
        }
        if capacity == 0 {
            return Err(OpsError::invalid_config("text.capacity must be at least 1"));
        }
        if self.text.value.len() >= capacity {
            return Err(OpsError::invalid_config(format!(
                "text.value is {} bytes but text.capacity is {capacity}",
                self.text.value.len()
            )));
        }
        Ok(())
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn lhs() -> i32 {
        10
    }

    pub const fn rhs() -> i32 {
        5
    }

    pub fn text() -> String {
        "Hello Android".to_string()
    }
}
