//! `ls` — list directory contents in columns sized to the terminal,
//! alphabetically, hidden entries skipped. Directories print bold blue,
//! executables bold green. No options.

use std::env;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::ExitCode;

use inksac::prelude::*;
use neosh::term::Painter;

fn terminal_width() -> usize {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(0, libc::TIOCGWINSZ, &mut size) };
    if rc == 0 && size.ws_col > 0 {
        size.ws_col as usize
    } else {
        80
    }
}

fn visible_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    Ok(names)
}

fn paint_name(dir: &Path, name: &str, painter: &Painter) -> String {
    match fs::metadata(dir.join(name)) {
        Ok(meta) if meta.is_dir() => painter.paint(name, Color::Blue, true),
        Ok(meta) if meta.permissions().mode() & 0o100 != 0 => {
            painter.paint(name, Color::Green, true)
        }
        _ => name.to_string(),
    }
}

fn print_columns(dir: &Path, names: &[String], width: usize, painter: &Painter) {
    if names.is_empty() {
        return;
    }

    // Column width is the longest name plus breathing room; escape codes
    // are not counted because padding is computed from the plain name.
    let col_size = names.iter().map(|n| n.len()).max().unwrap_or(0) + 3;
    let num_cols = (width / col_size).max(1);

    let mut terminated = false;
    for (index, name) in names.iter().enumerate() {
        print!("{}", paint_name(dir, name, painter));
        print!("{}", " ".repeat(col_size - name.len()));
        terminated = (index + 1) % num_cols == 0;
        if terminated {
            println!();
        }
    }
    if !terminated {
        println!();
    }
}

fn list_target(target: &str, show_header: bool, width: usize, painter: &Painter) -> bool {
    let path = Path::new(target);
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            eprintln!("ls: cannot access '{}': {}", target, e);
            return false;
        }
    };

    if !metadata.is_dir() {
        // A plain file argument just echoes its name, like the real ls.
        println!("{}", target);
        return true;
    }

    if show_header {
        println!("{}:", target);
    }
    match visible_entries(path) {
        Ok(names) => {
            print_columns(path, &names, width, painter);
            if show_header {
                println!();
            }
            true
        }
        Err(e) => {
            eprintln!("ls: cannot access '{}': {}", target, e);
            false
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let targets: Vec<&str> = if args.is_empty() {
        vec!["."]
    } else {
        args.iter().map(String::as_str).collect()
    };

    let width = terminal_width();
    let painter = Painter::new();
    let show_headers = targets.len() > 1;

    let mut failed = false;
    for target in targets {
        if !list_target(target, show_headers, width, &painter) {
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
