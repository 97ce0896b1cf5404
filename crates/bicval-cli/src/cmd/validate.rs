//! Implementation of `bicval validate [BIC]... [--input FILE]`.
//!
//! Checks every candidate against the ISO 9362 structure, runs the advisory
//! checks on the ones that pass, and writes findings plus a summary to stderr.
//! Nothing is written to stdout.
//!
//! Exit codes:
//! - 0 = every candidate is a valid BIC
//! - 1 = at least one candidate was rejected
//! - 2 = input failure, or no candidates at all
use std::io::Write;
use std::time::Instant;

use bicval_core::{AdvisoryConfig, BicReport, check};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{
    FormatMode, FormatterConfig, Summary, write_report, write_summary, write_timing_human,
};

/// Runs the `validate` command against `candidates`, reporting to stderr.
///
/// # Errors
///
/// - [`CliError::NoInput`]: `candidates` is empty.
/// - [`CliError::ValidationErrors`]: one or more candidates were rejected.
pub fn run(
    candidates: &[&str],
    advise: bool,
    format: OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(no_color, quiet, verbose);
    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();
    report(&mut err_out, candidates, advise, format.into(), &config)
}

/// Checks `candidates` and writes findings to `writer`.
///
/// # Errors
///
/// See [`run`]. Write failures become [`CliError::IoError`].
pub fn report<W: Write>(
    writer: &mut W,
    candidates: &[&str],
    advise: bool,
    mode: FormatMode,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    if candidates.is_empty() {
        return Err(CliError::NoInput);
    }

    let advisory = if advise {
        AdvisoryConfig::default()
    } else {
        AdvisoryConfig::none()
    };

    let started = Instant::now();
    let reports: Vec<BicReport> = candidates.iter().map(|c| check(c, &advisory)).collect();
    let elapsed = started.elapsed();

    let write_err = |e: std::io::Error| CliError::write_failed("stderr", &e);
    for r in &reports {
        write_report(writer, r, mode, config).map_err(write_err)?;
    }

    let summary = Summary::from_reports(&reports);
    write_summary(writer, &summary, mode, config).map_err(write_err)?;
    if mode == FormatMode::Human {
        write_timing_human(writer, "validated", elapsed, config).map_err(write_err)?;
    }
    tracing::debug!(
        candidates = summary.candidates,
        rejected = summary.rejected,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "validation finished"
    );

    if summary.rejected > 0 {
        Err(CliError::ValidationErrors {
            rejected: summary.rejected,
            total: summary.candidates,
        })
    } else {
        Ok(())
    }
}
