use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub(crate) use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    if let Err(e) = dispatch(&cli) {
        // The summary line already reports rejections.
        if !matches!(e, CliError::ValidationErrors { .. }) {
            eprintln!("{}", e.message());
        }
        std::process::exit(e.exit_code());
    }
}

/// Installs a stderr `tracing` subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Validate {
            candidates,
            input,
            no_advise,
        } => {
            let text = match input {
                Some(source) => io::read_input(source, cli.max_file_size)?,
                None => String::new(),
            };
            let all: Vec<&str> = candidates
                .iter()
                .map(String::as_str)
                .chain(io::candidate_lines(&text))
                .collect();
            cmd::validate::run(
                &all,
                !no_advise,
                cli.format,
                cli.quiet,
                cli.verbose,
                cli.no_color,
            )
        }
        Command::Inspect { bic } => cmd::inspect::run(bic, cli.format),
    }
}
