//! The demo report.
//!
//! [`run`] performs the fixed sequence of arithmetic and string operations and
//! writes the formatted results to any [`Write`] sink. The binary points it at
//! stdout; tests point it at a `Vec<u8>`.

use std::io::Write;

use hello_ops_common::{DemoConfig, OpsError};
use tracing::{debug, info, warn};

use crate::arithmetic::Operation;
use crate::strings::{TerminatedBuffer, reverse_string, string_length};

/// Write the full report for `config` to `out`.
///
/// # Errors
///
/// Returns an error if the configured text does not fit its buffer or if
/// writing to `out` fails. Neither happens with [`DemoConfig::default`].
/// Configuration errors are reported before anything is written.
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<(), OpsError> {
    config.validate()?;
    let buffer = TerminatedBuffer::with_capacity(
        &config.text.value,
        config.text.effective_capacity(),
    )?;

    write_math(out, config.math.lhs, config.math.rhs)?;
    writeln!(out)?;
    write_strings(out, buffer)?;

    out.flush()?;
    info!("Report complete");
    Ok(())
}

fn write_math<W: Write>(out: &mut W, lhs: i32, rhs: i32) -> Result<(), OpsError> {
    writeln!(out, "Math Operations:")?;
    for op in Operation::ALL {
        let result = op.apply(lhs, rhs);
        if let Err(e) = op.checked_apply(lhs, rhs) {
            warn!(%op, result, "{e}, printing wrapped result");
        }
        debug!(%op, lhs, rhs, result, "Computed");
        writeln!(out, "{lhs} {} {rhs} = {result}", op.symbol())?;
    }
    Ok(())
}

fn write_strings<W: Write>(out: &mut W, original: TerminatedBuffer) -> Result<(), OpsError> {
    let capacity = original.capacity();
    writeln!(out, "String Operations:")?;
    writeln!(out, "Original: {original}")?;

    let mut buffer = original.into_bytes();
    let length = string_length(&buffer)?;
    writeln!(out, "Length: {length}")?;

    reverse_string(&mut buffer)?;
    debug!(length, capacity, "Reversed buffer in place");
    writeln!(
        out,
        "Reversed: {}",
        String::from_utf8_lossy(&buffer[..length])
    )?;
    Ok(())
}
