//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default `--max-file-size`: 16 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits colored one-line findings. `Json` emits NDJSON for findings
/// and a single object for data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `bicval` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more candidate BICs against the ISO 9362 structure.
    Validate {
        /// Candidate BICs.
        #[arg(value_name = "BIC")]
        candidates: Vec<String>,
        /// Newline-separated candidates from a file, or `-` for stdin.
        ///
        /// Blank lines and lines starting with `#` are skipped.
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathOrStdin>,
        /// Skip the country, location and branch advisory checks.
        #[arg(long)]
        no_advise: bool,
    },

    /// Decompose a BIC into its institution, country, location and branch codes.
    Inspect {
        /// The BIC to inspect.
        #[arg(value_name = "BIC")]
        bic: String,
    },
}

/// Root CLI struct for the `bicval` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "bicval",
    version,
    about = "ISO 9362 BIC validator",
    long_about = "Validates Business Identifier Codes (BIC / SWIFT codes) against the\n\
                  ISO 9362 structure and decomposes them into their segments."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except rejections (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and debug logging
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum `--input` size in bytes.
    ///
    /// Can also be set via the `BICVAL_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "BICVAL_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Colors are also off whenever the `NO_COLOR` environment variable is
    /// present, whatever its value (<https://no-color.org>).
    #[arg(long, global = true)]
    pub no_color: bool,
}
