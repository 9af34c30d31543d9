//! `rm` — remove files, and directories with `-r`. A directory operand
//! without `-r` is reported and left in place.

use std::env;
use std::fs;
use std::process::ExitCode;

fn print_usage() -> ExitCode {
    eprintln!("Usage: rm [-r] [FILE]...");
    ExitCode::FAILURE
}

fn remove_entry(path: &str, recursive: bool) -> bool {
    // Symlinks are removed as links, never followed.
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => {
            eprintln!("rm: cannot remove '{}': No such file or directory", path);
            return false;
        }
    };

    if metadata.is_dir() {
        if !recursive {
            eprintln!("rm: -r not specified; omitting directory '{}'", path);
            return false;
        }
        if let Err(e) = fs::remove_dir_all(path) {
            eprintln!("rm: cannot remove '{}': {}", path, e);
            return false;
        }
        return true;
    }

    if let Err(e) = fs::remove_file(path) {
        eprintln!("rm: cannot remove '{}': {}", path, e);
        return false;
    }
    true
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut recursive = false;
    let mut operands: Vec<&str> = Vec::new();
    for arg in &args {
        match arg.as_str() {
            "-r" => recursive = true,
            other if other.starts_with('-') => return print_usage(),
            other => operands.push(other),
        }
    }

    if operands.is_empty() {
        return print_usage();
    }

    let mut failed = false;
    for path in operands {
        if !remove_entry(path, recursive) {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
