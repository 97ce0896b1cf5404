//! Implementation of `bicval inspect <BIC>`.
//!
//! Parses the value into a [`Bic`] and prints its segments to stdout.
//! A value that is not a BIC is reported on stderr with the offending
//! position and segment, exit code 1.
use std::io::Write;

use bicval_core::Bic;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatMode, write_bic_parts};

/// Runs the `inspect` command, writing to stdout.
///
/// # Errors
///
/// - [`CliError::NotABic`]: `value` fails the ISO 9362 structure check.
pub fn run(value: &str, format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    inspect(&mut out, value, format.into())
}

/// Parses `value` and writes its segments to `writer`.
///
/// # Errors
///
/// See [`run`]. Write failures become [`CliError::IoError`].
pub fn inspect<W: Write>(writer: &mut W, value: &str, mode: FormatMode) -> Result<(), CliError> {
    let bic = Bic::try_from(value).map_err(|e| CliError::NotABic {
        detail: e.to_string(),
    })?;
    write_bic_parts(writer, &bic, mode).map_err(|e| CliError::write_failed("stdout", &e))
}
