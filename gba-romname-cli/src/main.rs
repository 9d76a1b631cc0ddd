//! gba-romname CLI
//!
//! Scans a directory tree for Game Boy Advance ROMs and prints one
//! `key|code|title` line per identifiable ROM.

mod cli_types;
mod error;

use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::panic;
use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use gba_romname_lib::{ScanOptions, write_catalog};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = match parse_args(env::args_os().collect()) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return print_usage(),
    };
    let [roms_path] = cli.roms_path.as_slice() else {
        return print_usage();
    };

    init_logger(&cli);
    panic::set_hook(Box::new(|info| {
        log::error!("An unexpected error occurred: {info}");
    }));

    let options = ScanOptions::new().jobs(cli.jobs);
    match panic::catch_unwind(|| run(roms_path, &options)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
        // Already reported by the panic hook
        Err(_) => ExitCode::FAILURE,
    }
}

/// A lone argument other than `-h`/`--help` is always the ROM path, even
/// when it looks like a flag. Anything else goes through clap.
fn parse_args(args: Vec<OsString>) -> Result<Cli, clap::Error> {
    match args.as_slice() {
        [_, only] if only != "-h" && only != "--help" => Ok(Cli::with_path(only.into())),
        _ => Cli::try_parse_from(&args),
    }
}

/// Usage goes to stdout and is not an error, even if stdout is closed.
fn print_usage() -> ExitCode {
    let _ = writeln!(io::stdout(), "{}", Cli::command().render_usage());
    ExitCode::SUCCESS
}

fn init_logger(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr);
    if !cli.verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}

fn run(roms_path: &Path, options: &ScanOptions) -> Result<(), CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(e.to_string()))?;

    let out = BufWriter::new(io::stdout());
    let summary = runtime
        .block_on(write_catalog(roms_path, options, out))
        .map_err(|e| CliError::catalog(roms_path, e))?;

    log::info!(
        "Catalogued {} of {} ROMs ({} skipped, {} unreadable)",
        summary.emitted,
        summary.candidates,
        summary.skipped,
        summary.failed,
    );
    Ok(())
}
