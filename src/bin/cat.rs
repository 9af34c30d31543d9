//! `cat` — concatenate the named files to stdout. With no operands it
//! does nothing (it does not read stdin). The first unopenable file
//! stops the run; a directory operand is reported and skipped.

use std::env;
use std::fs::File;
use std::io;
use std::process::ExitCode;

fn print_file(path: &str) -> Result<(), ExitCode> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cat: cannot open '{}': {}", path, e);
            return Err(ExitCode::FAILURE);
        }
    };

    let is_dir = file.metadata().map(|m| m.is_dir()).unwrap_or(false);
    if is_dir {
        eprintln!("cat: cannot read '{}': Is a directory", path);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = io::copy(&mut file, &mut stdout) {
        eprintln!("cat: cannot read '{}': {}", path, e);
        return Err(ExitCode::FAILURE);
    }
    Ok(())
}

fn main() -> ExitCode {
    for path in env::args().skip(1) {
        if let Err(code) = print_file(&path) {
            return code;
        }
    }
    ExitCode::SUCCESS
}
