//! `mkdir` — create each named directory. No options; existing targets
//! are reported as errors and the remaining operands still get created.

use std::env;
use std::fs;
use std::process::ExitCode;

fn print_usage() {
    println!("Usage: mkdir DIRECTORY...");
    println!("mkdir is a utility to create directory(ies), if they do not exist.");
}

fn main() -> ExitCode {
    let dirs: Vec<String> = env::args().skip(1).collect();
    if dirs.is_empty() {
        eprintln!("mkdir: missing operand");
        print_usage();
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for dir in &dirs {
        if let Err(e) = fs::create_dir(dir) {
            eprintln!("mkdir: cannot create directory '{}': {}", dir, e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
