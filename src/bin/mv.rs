//! `mv` — rename a file, or move source(s) into an existing directory.
//! No options; an existing file target is overwritten by the rename.

use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn print_usage() {
    println!("Usage: mv SOURCE DESTINATION");
    println!("or:    mv SOURCE(s) DIRECTORY");
    println!("A utility to Rename source to destination, or Move source(s) to directory");
}

/// Rename `source`, either into `target` (a directory, keeping the
/// source's file name) or to `target` as the new name.
fn move_entry(source: &str, target: &Path, target_is_dir: bool) -> bool {
    let destination = if target_is_dir {
        match Path::new(source).file_name() {
            Some(name) => target.join(name),
            None => {
                eprintln!("mv: cannot move '{}': invalid source name", source);
                return false;
            }
        }
    } else {
        target.to_path_buf()
    };

    match fs::rename(source, &destination) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "mv: cannot move '{}' to '{}': {}",
                source,
                destination.display(),
                e
            );
            false
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("mv: missing operands");
        print_usage();
        return ExitCode::FAILURE;
    }

    let (sources, target) = match args.split_last() {
        Some((target, sources)) => (sources, Path::new(target)),
        None => return ExitCode::FAILURE,
    };
    let target_is_dir = target.is_dir();

    if sources.len() > 1 && !target_is_dir {
        eprintln!("mv: target '{}' is not a directory", target.display());
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for source in sources {
        if !move_entry(source, target, target_is_dir) {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
