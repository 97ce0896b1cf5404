//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `bicval` binary. Every
//! variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
//!
//! - Exit code **2**: input failure. The tool could not read the input or was
//!   given nothing to check.
//! - Exit code **1**: logical failure. The tool ran to completion but at least
//!   one candidate is not a valid BIC.
use std::path::PathBuf;

/// All error conditions that the `bicval` CLI can produce.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// An `--input` file could not be found on the filesystem.
    #[error("error: file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read an `--input` file.
    #[error("error: permission denied: {}", .path.display())]
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    #[error("error: file too large: {input} {}", size_detail(.limit, .actual))]
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        input: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    #[error("error: invalid UTF-8 in {input}: first invalid byte at offset {byte_offset}")]
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        input: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("error: failed to read stdin: {detail}")]
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    #[error("error: I/O error on {input}: {detail}")]
    IoError {
        /// `"-"` for stdin, `"stderr"`/`"stdout"` for output, or a path.
        input: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// Neither positional candidates nor `--input` lines were supplied.
    #[error("error: no BIC candidates given; pass them as arguments or via --input")]
    NoInput,

    // --- Exit code 1: logical failures ---
    /// One or more candidates failed the ISO 9362 structure check.
    ///
    /// The rejections have already been printed; this variant exists so
    /// `main` can exit with code 1 cleanly.
    #[error("error: {rejected} of {total} candidates failed validation")]
    ValidationErrors {
        /// Number of rejected candidates.
        rejected: usize,
        /// Number of candidates checked.
        total: usize,
    },

    /// `inspect` was given a value that is not a BIC.
    #[error("error: {detail}")]
    NotABic {
        /// The parse error, naming the offending position and segment.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, no candidates, etc.).
    /// - `1`: logical failure (rejected candidates, not a BIC).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::NoInput => 2,

            Self::ValidationErrors { .. } | Self::NotABic { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Wraps an output-stream write failure.
    pub fn write_failed(stream: &str, e: &std::io::Error) -> Self {
        Self::IoError {
            input: stream.to_owned(),
            detail: e.to_string(),
        }
    }
}

fn size_detail(limit: &u64, actual: &Option<u64>) -> String {
    match actual {
        Some(actual) => format!("is {actual} bytes, limit is {limit} bytes"),
        None => format!("exceeded limit of {limit} bytes"),
    }
}
