//! Error types for hello-ops.
//!
//! [`OpsError`] covers every failure the arithmetic and string operations can
//! report, plus the output and configuration failures of the report.

use std::io;

use thiserror::Error;

/// Errors from the arithmetic and string operations.
///
/// None of these are reachable with the default demo inputs; they exist so
/// that callers passing arbitrary buffers or operands get a value back
/// instead of an out-of-bounds read or a silent wrap.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The byte sequence has no sentinel (zero) byte within its capacity.
    #[error("No terminator found within {capacity} bytes")]
    MissingTerminator {
        /// Number of bytes scanned.
        capacity: usize,
    },

    /// The text contains a zero byte before its logical end.
    #[error("Interior terminator at byte {position}")]
    InteriorSentinel {
        /// Offset of the first zero byte.
        position: usize,
    },

    /// The text plus its terminator does not fit the requested capacity.
    #[error("Text of {len} bytes does not fit capacity {capacity}")]
    CapacityExceeded {
        /// Length of the text without the terminator.
        len: usize,
        /// Requested buffer capacity including the terminator.
        capacity: usize,
    },

    /// The requested capacity is above the buffer ceiling.
    #[error("Capacity {capacity} exceeds maximum of {max} bytes")]
    CapacityTooLarge {
        /// Requested buffer capacity.
        capacity: usize,
        /// Largest capacity accepted.
        max: usize,
    },

    /// A checked arithmetic operation overflowed `i32`.
    #[error("Integer overflow: {lhs} {op} {rhs}")]
    Overflow {
        /// Operator symbol.
        op: char,
        /// Left operand.
        lhs: i32,
        /// Right operand.
        rhs: i32,
    },

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl OpsError {
    /// Create a new `Overflow` error.
    pub fn overflow(op: char, lhs: i32, rhs: i32) -> Self {
        Self::Overflow { op, lhs, rhs }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error concerns the shape of a byte buffer.
    pub fn is_buffer_error(&self) -> bool {
        matches!(
            self,
            Self::MissingTerminator { .. }
                | Self::InteriorSentinel { .. }
                | Self::CapacityExceeded { .. }
                | Self::CapacityTooLarge { .. }
        )
    }
}
