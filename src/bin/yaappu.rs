//! Command-line interface for yaappu
//! Classifies verse files and prints the result in one of the processing formats.
//!
//! Usage:
//!   yaappu process `<path>` [format]   - Classify a file and print to stdout
//!   yaappu `<path>` [format]           - Same as process (default command)
//!   yaappu normalize `<path>`          - Print the agaram-swapped text
//!   yaappu formats                   - List all available formats
//!
//! The default format is `paa-tag`. Set `RUST_LOG=debug` for diagnostics on stderr.

use clap::{Arg, ArgMatches, Command};
use std::fs;
use tracing_subscriber::EnvFilter;
use yaappu::prosody::agaram::normalize;
use yaappu::prosody::processor::{
    available_formats, process_file, ProcessingError, ProcessingSpec,
};

const DEFAULT_FORMAT: &str = "paa-tag";

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the verse file")
        .index(1)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .help("Output format (default: paa-tag; see `yaappu formats`)")
        .index(2)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("yaappu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prosodic classification of classical Tamil verse")
        .subcommand_required(false)
        .arg_required_else_help(true)
        // Default command args
        .arg(path_arg())
        .arg(format_arg())
        // Subcommands
        .subcommand(
            Command::new("process")
                .about("Classify a file and print to stdout (default command)")
                .arg(path_arg().required(true))
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the agaram-swapped text of a file")
                .arg(path_arg().required(true)),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("process", process_matches)) => handle_process_command(process_matches),
        Some(("normalize", normalize_matches)) => handle_normalize_command(normalize_matches),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => handle_process_command(&matches),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str, ProcessingError> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| ProcessingError::InvalidFormat(format!("missing <{}>", id)))
}

/// Handle the process command
fn handle_process_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let path = required(matches, "path")?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FORMAT);
    let spec = ProcessingSpec::from_string(format)?;
    let output = process_file(path, &spec)?;
    println!("{}", output.trim_end_matches('\n'));
    Ok(())
}

/// Handle the normalize command
fn handle_normalize_command(matches: &ArgMatches) -> Result<(), ProcessingError> {
    let path = required(matches, "path")?;
    let content = fs::read_to_string(path)
        .map_err(|e| ProcessingError::Io(format!("Failed to read {}: {}", path, e)))?;
    print!("{}", normalize(&content));
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
