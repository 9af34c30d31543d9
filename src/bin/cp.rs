//! `cp` — copy files, and directories with `-r`. Directory copies go one
//! level deep: regular files inside the source directory are copied,
//! nested directories are skipped.

use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

fn print_usage() -> ExitCode {
    eprintln!("Usage: cp [-r] SOURCE DEST");
    eprintln!("or:    cp [-r] SOURCE... DIRECTORY");
    ExitCode::FAILURE
}

fn copy_file(source: &Path, destination: &Path) -> bool {
    match fs::copy(source, destination) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("cp: cannot access '{}': {}", destination.display(), e);
            false
        }
    }
}

/// Copy the regular files directly inside `source` into `destination`,
/// creating it first. Nested directories are not descended into.
fn copy_dir_shallow(source: &Path, destination: &Path) -> bool {
    if let Err(e) = fs::create_dir_all(destination) {
        eprintln!("cp: cannot access '{}': {}", destination.display(), e);
        return false;
    }

    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("cp: cannot access '{}': {}", source.display(), e);
            return false;
        }
    };

    let mut ok = true;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if !copy_file(&path, &destination.join(entry.file_name())) {
            ok = false;
        }
    }
    ok
}

fn copy_entry(source: &str, target: &Path, target_is_dir: bool, recursive: bool) -> bool {
    let source_path = Path::new(source);
    let metadata = match fs::metadata(source_path) {
        Ok(metadata) => metadata,
        Err(_) => {
            eprintln!("cp: cannot access '{}': No such file or directory", source);
            return false;
        }
    };

    if metadata.is_dir() && !recursive {
        eprintln!("cp: -r not specified; omitting directory '{}'", source);
        return false;
    }

    if target_is_dir {
        let destination = match source_path.file_name() {
            Some(name) => target.join(name),
            None => {
                eprintln!("cp: cannot copy '{}': invalid source name", source);
                return false;
            }
        };
        if metadata.is_dir() {
            return copy_dir_shallow(source_path, &destination);
        }
        return copy_file(source_path, &destination);
    }

    if target.exists() {
        if metadata.is_dir() {
            eprintln!(
                "cp: cannot overwrite non-directory '{}' with directory '{}'",
                target.display(),
                source
            );
            return false;
        }
        return copy_file(source_path, target);
    }

    // Target names something new: a directory copy creates it, a file
    // copy writes it.
    if metadata.is_dir() {
        return copy_dir_shallow(source_path, target);
    }
    copy_file(source_path, target)
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

    if operands.len() < 2 {
        return print_usage();
    }

    let Some((target, sources)) = operands.split_last() else {
        return print_usage();
    };
    let target = Path::new(target);
    let target_is_dir = target.is_dir();

    if sources.len() > 1 && !target_is_dir {
        eprintln!("cp: target '{}' is not a directory", target.display());
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for source in sources {
        if !copy_entry(source, target, target_is_dir, recursive) {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
