//! `json-diff`: print the JSON Patch that turns one document into another.
//!
//! Usage:
//!   json-diff <SRC> <DST>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_splice::json_cli::{diff_json, init_tracing, read_input, CliError};

#[derive(Parser, Debug)]
#[command(name = "json-diff")]
#[command(version, about = "Generate a JSON Patch between two JSON files", long_about = None)]
struct Args {
    /// Source document.
    #[arg(value_name = "SRC")]
    src: PathBuf,

    /// Target document.
    #[arg(value_name = "DST")]
    dst: PathBuf,
}

fn run(args: &Args) -> Result<String, CliError> {
    let src = read_input(Some(args.src.as_path()))?;
    let dst = read_input(Some(args.dst.as_path()))?;
    diff_json(&src, &dst)
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
