//! `--input` reading with size enforcement and UTF-8 validation.
//!
//! `bicval-core` never touches the filesystem; all reading happens here.
//!
//! - Disk files: size checked via `std::fs::metadata` before any read.
//! - Stdin: buffered with a `Read::take` cap so allocation is bounded.
//! - UTF-8 validation via `std::str::from_utf8` with byte-offset reporting.
//! - All I/O errors are converted to [`CliError`] variants with exit code 2.
use std::io::{ErrorKind, Read as _};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, input
/// larger than `max_size`, or invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// Splits input text into candidate BICs.
///
/// Each line is trimmed. Blank lines and lines starting with `#` are skipped.
/// Interior whitespace is kept so that `"DEUT DEFF"` is still rejected.
pub fn candidate_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            input: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    bytes_to_string(&bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            input: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// If the stream produces exactly `max_size` bytes one more byte is probed to
/// distinguish "exactly at the limit" from "over the limit".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();

    let mut buf: Vec<u8> = Vec::new();
    (&mut handle)
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                input: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    tracing::debug!(bytes = buf.len(), "read stdin");
    bytes_to_string(&buf, "-")
}

/// Converts a byte buffer to a `String`, reporting the byte offset of the
/// first invalid sequence on failure. A leading UTF-8 BOM is dropped.
fn bytes_to_string(bytes: &[u8], source_label: &str) -> Result<String, CliError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.strip_prefix('\u{feff}').unwrap_or(s).to_owned()),
        Err(e) => Err(CliError::InvalidUtf8 {
            input: source_label.to_owned(),
            byte_offset: e.valid_up_to(),
        }),
    }
}
