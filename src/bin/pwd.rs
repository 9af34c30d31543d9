//! `pwd` — print the current working directory. Takes no arguments.

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    if env::args().count() > 1 {
        eprintln!("pwd: too many arguments");
        return ExitCode::FAILURE;
    }

    match env::current_dir() {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("pwd: {}", e);
            ExitCode::FAILURE
        }
    }
}
