//! Arithmetic and terminated-string operations for hello-ops.
//!
//! - [`arithmetic`]: `add`, `subtract`, `multiply` over `i32`
//! - [`strings`]: `string_length` and `reverse_string` over zero-terminated byte buffers
//! - [`report`]: the demo sequence that prints both
//!
//! ```text
//!  arithmetic      strings
//!       \            /
//!        \          /
//!         ▼        ▼
//!           report  ──►  impl Write (stdout)
//! ```

pub mod arithmetic;
pub mod report;
pub mod strings;

pub use arithmetic::{Operation, add, multiply, subtract};
pub use strings::{TerminatedBuffer, reverse_string, string_length};
