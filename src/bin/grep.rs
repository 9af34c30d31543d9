//! `grep` — literal substring search, line by line. Matches are
//! highlighted bold red; with more than one file each match line carries
//! a `file:` prefix. No files means stdin. The pattern is taken as-is —
//! no regular expressions. A literal `""` argument is the empty pattern,
//! which matches every line.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

use inksac::prelude::*;
use neosh::term::Painter;

/// Byte ranges of the non-overlapping matches of `pattern` in `line`,
/// left to right. The empty pattern produces no ranges; callers treat it
/// as matching the whole line.
fn match_ranges(line: &str, pattern: &str) -> Vec<(usize, usize)> {
    if pattern.is_empty() {
        return Vec::new();
    }
    line.match_indices(pattern)
        .map(|(start, matched)| (start, start + matched.len()))
        .collect()
}

fn render_line(line: &str, ranges: &[(usize, usize)], painter: &Painter) -> String {
    let mut out = String::new();
    let mut last = 0;
    for &(start, end) in ranges {
        out.push_str(&line[last..start]);
        out.push_str(&painter.paint(&line[start..end], Color::Red, true));
        last = end;
    }
    out.push_str(&line[last..]);
    out
}

fn scan<R: BufRead>(
    reader: R,
    pattern: &str,
    label: Option<&str>,
    painter: &Painter,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let ranges = match_ranges(&line, pattern);
        if !pattern.is_empty() && ranges.is_empty() {
            continue;
        }
        if let Some(name) = label {
            print!(
                "{}{}",
                painter.paint(name, Color::Magenta, false),
                painter.paint(":", Color::Cyan, false)
            );
        }
        println!("{}", render_line(&line, &ranges, painter));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some((pattern, files)) = args.split_first() else {
        eprintln!("Usage: grep PATTERN [FILE]...");
        return ExitCode::FAILURE;
    };

    // The interpreter does no quoting, so an empty pattern arrives as a
    // literal `""` token.
    let pattern = if pattern == "\"\"" { "" } else { pattern.as_str() };
    let painter = Painter::new();

    if files.is_empty() {
        let stdin = io::stdin();
        if let Err(e) = scan(stdin.lock(), pattern, None, &painter) {
            eprintln!("grep: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let multiple = files.len() > 1;
    for file in files {
        let handle = match File::open(file) {
            Ok(handle) => handle,
            Err(e) => {
                eprintln!("grep: cannot open '{}': {}", file, e);
                return ExitCode::FAILURE;
            }
        };

        if handle.metadata().map(|m| m.is_dir()).unwrap_or(false) {
            eprintln!("grep: cannot read '{}': Is a directory", file);
            continue;
        }

        let label = if multiple { Some(file.as_str()) } else { None };
        if let Err(e) = scan(BufReader::new(handle), pattern, label, &painter) {
            eprintln!("grep: cannot read '{}': {}", file, e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
