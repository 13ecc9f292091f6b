//! Sentinel-terminated byte strings.
//!
//! A string here is a fixed-capacity byte buffer whose logical end is the
//! first zero byte. Scans never run past the end of the slice: a buffer with
//! no terminator is reported as [`OpsError::MissingTerminator`].
//!
//! - [`string_length`] and [`reverse_string`] work on borrowed slices
//! - [`TerminatedBuffer`] owns a buffer that always holds a terminator

use std::fmt;

use hello_ops_common::{MAX_TEXT_CAPACITY, OpsError};

/// The terminating byte.
pub const SENTINEL: u8 = 0;

/// Number of bytes preceding the first sentinel.
pub fn string_length(s: &[u8]) -> Result<usize, OpsError> {
    s.iter()
        .position(|&b| b == SENTINEL)
        .ok_or(OpsError::MissingTerminator { capacity: s.len() })
}

/// Reverse the bytes preceding the sentinel, in place.
///
/// The sentinel itself, anything after it, and the middle byte of an
/// odd-length string are left untouched.
pub fn reverse_string(s: &mut [u8]) -> Result<(), OpsError> {
    let length = string_length(s)?;
    reverse_prefix(s, length);
    Ok(())
}

// Two-index swap converging on the middle: `length / 2` swaps.
fn reverse_prefix(s: &mut [u8], length: usize) {
    for i in 0..length / 2 {
        s.swap(i, length - i - 1);
    }
}

/// An owned, fixed-capacity byte buffer with a guaranteed terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatedBuffer {
    // Length is the capacity and never changes after construction.
    bytes: Vec<u8>,
}

impl TerminatedBuffer {
    /// Buffer sized exactly to `text` plus its terminator.
    pub fn new(text: &str) -> Result<Self, OpsError> {
        Self::with_capacity(text, text.len() + 1)
    }

    /// Buffer of `capacity` bytes holding `text`, zero-filled after it.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InteriorSentinel`] if `text` contains a zero byte
    /// - [`OpsError::CapacityTooLarge`] if `capacity` is above [`MAX_TEXT_CAPACITY`]
    /// - [`OpsError::CapacityExceeded`] if `text` needs more than `capacity - 1` bytes
    pub fn with_capacity(text: &str, capacity: usize) -> Result<Self, OpsError> {
        if capacity > MAX_TEXT_CAPACITY {
            return Err(OpsError::CapacityTooLarge {
                capacity,
                max: MAX_TEXT_CAPACITY,
            });
        }
        if let Some(position) = text.bytes().position(|b| b == SENTINEL) {
            return Err(OpsError::InteriorSentinel { position });
        }
        if text.len() >= capacity {
            return Err(OpsError::CapacityExceeded {
                len: text.len(),
                capacity,
            });
        }

        let mut bytes = vec![SENTINEL; capacity];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Self { bytes })
    }

    /// Logical length.
    pub fn len(&self) -> usize {
        self.terminator()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes, terminator included.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Bytes preceding the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.terminator()]
    }

    /// Full backing storage, terminator and padding included.
    pub fn raw(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up the terminator guarantee and take the backing storage.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn terminator(&self) -> usize {
        // Construction guarantees a sentinel at or before the last byte.
        string_length(&self.bytes).unwrap_or(self.bytes.len())
    }
}

impl fmt::Display for TerminatedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
