//! Finding formatting: human-readable and JSON (NDJSON) modes.
//!
//! - **Human mode** (default): one line per annotation, color-coded by level.
//!   Colors are disabled when `--no-color` is set, the `NO_COLOR`
//!   environment variable is present (per <https://no-color.org>), or stderr
//!   is not a TTY.
//! - **JSON mode**: each annotation is a single-line JSON object (NDJSON).
//!
//! Both modes honour **quiet** (only rejections, no summary) and **verbose**
//! (adds timing).
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use bicval_core::{AnnotationLevel, Bic, BicReport, ValidationAnnotation};
use serde_json::json;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_CYAN: &str = "\x1b[36m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress everything except rejections.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Human-readable, optionally colored output.
    Human,
    /// Structured NDJSON output.
    Json,
}

impl From<crate::OutputFormat> for FormatMode {
    fn from(format: crate::OutputFormat) -> Self {
        match format {
            crate::OutputFormat::Human => Self::Human,
            crate::OutputFormat::Json => Self::Json,
        }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Counts over a batch of [`BicReport`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Candidates checked.
    pub candidates: usize,
    /// Candidates that passed the structure check.
    pub valid: usize,
    /// Candidates that failed the structure check.
    pub rejected: usize,
    /// `WARN` advisories.
    pub warnings: usize,
    /// `INFO` advisories.
    pub infos: usize,
}

impl Summary {
    /// Tallies `reports`.
    pub fn from_reports(reports: &[BicReport]) -> Self {
        reports.iter().fold(Self::default(), |mut acc, report| {
            acc.candidates += 1;
            if report.is_valid() {
                acc.valid += 1;
            } else {
                acc.rejected += 1;
            }
            acc.warnings += report.warnings().count();
            acc.infos += report.infos().count();
            acc
        })
    }
}

fn suppressed(annotation: &ValidationAnnotation, config: &FormatterConfig) -> bool {
    config.quiet && !annotation.is_rejection()
}

// ---------------------------------------------------------------------------
// Human-mode formatting
// ---------------------------------------------------------------------------

/// Writes one annotation in human-readable format.
///
/// Format: `[R] ISO_9362 check  "DEUT1DFF": BIC is not valid.`
///
/// The tag is `[R]` (red), `[W]` (yellow) or `[I]` (cyan). In quiet mode only
/// rejections are written.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_annotation_human<W: Write>(
    writer: &mut W,
    candidate: &str,
    annotation: &ValidationAnnotation,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if suppressed(annotation, config) {
        return Ok(());
    }

    let (tag, color) = match annotation.level() {
        AnnotationLevel::Reject => ("[R]", ANSI_RED),
        AnnotationLevel::Warn => ("[W]", ANSI_YELLOW),
        AnnotationLevel::Info => ("[I]", ANSI_CYAN),
    };

    let (open, close) = if config.colors {
        (color, ANSI_RESET)
    } else {
        ("", "")
    };
    writeln!(
        writer,
        "{open}{tag}{close} {check}  {candidate:?}: {message}",
        check = annotation.check_name(),
        message = annotation.message(),
    )
}

/// Writes the batch summary line.
///
/// Format: `3 candidates: 2 valid, 1 rejected, 0 warnings, 1 info`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    summary: &Summary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{} {}: {} valid, {} rejected, {} {}, {} info",
        summary.candidates,
        pluralize(summary.candidates, "candidate", "candidates"),
        summary.valid,
        summary.rejected,
        summary.warnings,
        pluralize(summary.warnings, "warning", "warnings"),
        summary.infos,
    )
}

/// Writes timing information in verbose mode. No-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}µs", duration.as_micros())
}

// ---------------------------------------------------------------------------
// JSON-mode formatting (NDJSON)
// ---------------------------------------------------------------------------

/// Writes one annotation as an NDJSON line.
///
/// ```json
/// {"candidate":"DEUT1DFF","check_name":"ISO_9362 check","severity":"REJECT","message":"BIC is not valid."}
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_annotation_json<W: Write>(
    writer: &mut W,
    candidate: &str,
    annotation: &ValidationAnnotation,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if suppressed(annotation, config) {
        return Ok(());
    }
    let line = json!({
        "candidate": candidate,
        "check_name": annotation.check_name(),
        "severity": annotation.level(),
        "message": annotation.message(),
    });
    serde_json::to_writer(&mut *writer, &line)?;
    writeln!(writer)
}

/// Writes the batch summary as a final NDJSON line.
///
/// Format: `{"summary":{"candidates":3,"valid":2,"rejected":1,"warnings":0,"info":1}}`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    summary: &Summary,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let line = json!({
        "summary": {
            "candidates": summary.candidates,
            "valid": summary.valid,
            "rejected": summary.rejected,
            "warnings": summary.warnings,
            "info": summary.infos,
        }
    });
    serde_json::to_writer(&mut *writer, &line)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Dispatch by format
// ---------------------------------------------------------------------------

/// Writes every annotation of `report` in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &BicReport,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let candidate = report.result.candidate();
    for annotation in report.annotations() {
        match mode {
            FormatMode::Human => write_annotation_human(writer, candidate, annotation, config)?,
            FormatMode::Json => write_annotation_json(writer, candidate, annotation, config)?,
        }
    }
    Ok(())
}

/// Writes a summary in the requested format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &Summary,
    mode: FormatMode,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => write_summary_human(writer, summary, config),
        FormatMode::Json => write_summary_json(writer, summary, config),
    }
}

// ---------------------------------------------------------------------------
// inspect output
// ---------------------------------------------------------------------------

/// Writes the decomposed `bic` for `bicval inspect`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_bic_parts<W: Write>(writer: &mut W, bic: &Bic, mode: FormatMode) -> std::io::Result<()> {
    match mode {
        FormatMode::Human => {
            writeln!(writer, "bic:            {bic}")?;
            writeln!(writer, "institution:    {}", bic.institution())?;
            writeln!(writer, "country:        {}", bic.country())?;
            writeln!(writer, "location:       {}", bic.location())?;
            writeln!(writer, "branch:         {}", bic.branch().unwrap_or("-"))?;
            writeln!(writer, "bic11:          {}", bic.to_bic11())?;
            writeln!(
                writer,
                "primary office: {}",
                if bic.is_primary_office() { "yes" } else { "no" }
            )?;
            writeln!(writer, "location kind:  {}", bic.location_kind())
        }
        FormatMode::Json => {
            let value = json!({
                "bic": bic,
                "institution": bic.institution(),
                "country": bic.country(),
                "location": bic.location(),
                "branch": bic.branch(),
                "bic11": bic.to_bic11(),
                "primary_office": bic.is_primary_office(),
                "location_kind": bic.location_kind(),
            });
            serde_json::to_writer_pretty(&mut *writer, &value)?;
            writeln!(writer)
        }
    }
}

fn pluralize<'a>(n: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if n == 1 { singular } else { plural }
}
