//! `line`: print a single line of a file or of stdin

use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{error::ErrorKind, CommandFactory, FromArgMatches, Parser};
use nthline::{
    error::{plural_lines, EXIT_ARGUMENT},
    locate, Error, Ordinal, Source,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "line",
    about = "Print a single line of a file or of stdin",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Line to print, starting at 1
    #[arg(value_name = "LINE_NUMBER", allow_negative_numbers = true)]
    line: Ordinal,

    /// File to read. Reads stdin if omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Logs go to stderr, stdout only ever gets the line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let program = program_name();

    let cli = match parse_args(&program) {
        Ok(cli) => cli,
        Err(err) => return usage_error(&program, err),
    };
    debug!(?cli, "parsed arguments");

    let source = Source::from_path(cli.file);

    match run(cli.line, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&program, &source, &err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Parses argv, naming the command after argv[0] so usage and examples agree
fn parse_args(program: &str) -> Result<Cli, clap::Error> {
    let matches = Cli::command().bin_name(program).try_get_matches()?;
    Cli::from_arg_matches(&matches)
}

fn run(target: Ordinal, source: &Source) -> nthline::Result<()> {
    // The input gets closed once `locate` returns, before anything is printed
    let line = locate(source.open()?, target)?;

    let stdout = io::stdout();
    line.write_to(&mut stdout.lock())?;
    Ok(())
}

fn report(program: &str, source: &Source, err: &Error) {
    match err {
        Error::NotFound { ordinal, lines } => eprintln!(
            "{}: line {} not found in {} ({} has {} {})",
            program,
            ordinal,
            source,
            source.noun(),
            lines,
            plural_lines(*lines)
        ),
        err => eprintln!("{}: {}", program, err),
    }
}

fn usage_error(program: &str, err: clap::Error) -> ExitCode {
    // Every clap error is a usage error, there is no --help or --version
    if err.print().is_err() {
        return ExitCode::from(EXIT_ARGUMENT);
    }

    // A bad line number only needs the reason, anything else gets the examples
    if err.kind() != ErrorKind::ValueValidation {
        eprintln!("Examples:");
        eprintln!(
            "  {} 3 file.txt               # Print line 3 from file.txt",
            program
        );
        eprintln!(
            "  grep xyz file.txt | {} 1    # Print first matching line",
            program
        );
    }

    ExitCode::from(EXIT_ARGUMENT)
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "line".to_owned())
}
