//! `json-pointer`: look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer '<pointer>' [--doc FILE]
//!
//! The document is read from `--doc` or, when absent, from stdin.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_splice::json_cli::{init_tracing, lookup_pointer, read_input, CliError};

#[derive(Parser, Debug)]
#[command(name = "json-pointer")]
#[command(version, about = "Print the value a JSON Pointer addresses", long_about = None)]
struct Args {
    /// Pointer such as `/foo/0`; the empty string selects the whole document.
    #[arg(value_name = "POINTER", allow_hyphen_values = true)]
    pointer: String,

    /// Read the document from this file instead of stdin.
    #[arg(short = 'd', long = "doc", value_name = "FILE")]
    doc: Option<PathBuf>,
}

fn run(args: &Args) -> Result<String, CliError> {
    let doc = read_input(args.doc.as_deref())?;
    lookup_pointer(doc.trim(), &args.pointer)
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
