//! `json-patch`: apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch '<patch-array-json>' [--doc FILE]
//!
//! The document is read from `--doc` or, when absent, from stdin.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_splice::json_cli::{apply_json_patch, init_tracing, read_input, CliError};

#[derive(Parser, Debug)]
#[command(name = "json-patch")]
#[command(version, about = "Apply a JSON Patch to a JSON document", long_about = None)]
struct Args {
    /// Patch operations as a JSON array.
    #[arg(value_name = "PATCH")]
    patch: String,

    /// Read the document from this file instead of stdin.
    #[arg(short = 'd', long = "doc", value_name = "FILE")]
    doc: Option<PathBuf>,
}

fn run(args: &Args) -> Result<String, CliError> {
    let doc = read_input(args.doc.as_deref())?;
    apply_json_patch(doc.trim(), &args.patch)
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
