//! Signed integer arithmetic.
//!
//! The plain functions wrap on overflow (two's complement). The `checked_*`
//! variants report overflow as [`OpsError::Overflow`].

use std::fmt;

use hello_ops_common::OpsError;

/// Returns `a + b`, wrapping on overflow.
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns `a - b`, wrapping on overflow.
pub const fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Returns `a * b`, wrapping on overflow.
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Returns `a + b`, or [`OpsError::Overflow`].
pub fn checked_add(a: i32, b: i32) -> Result<i32, OpsError> {
    Operation::Add.checked_apply(a, b)
}

/// Returns `a - b`, or [`OpsError::Overflow`].
pub fn checked_subtract(a: i32, b: i32) -> Result<i32, OpsError> {
    Operation::Subtract.checked_apply(a, b)
}

/// Returns `a * b`, or [`OpsError::Overflow`].
pub fn checked_multiply(a: i32, b: i32) -> Result<i32, OpsError> {
    Operation::Multiply.checked_apply(a, b)
}

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in report order.
    pub const ALL: [Self; 3] = [Self::Add, Self::Subtract, Self::Multiply];

    /// Infix symbol used when printing.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
        }
    }

    /// Apply with wrapping semantics.
    pub const fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
        }
    }

    /// Apply, failing on overflow.
    pub fn checked_apply(self, a: i32, b: i32) -> Result<i32, OpsError> {
        let result = match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
            Self::Multiply => a.checked_mul(b),
        };
        result.ok_or_else(|| OpsError::overflow(self.symbol(), a, b))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
            Self::Multiply => write!(f, "multiply"),
        }
    }
}
