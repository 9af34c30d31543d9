use super::{Command, CommandError};

/// The `exit` built-in. Takes no arguments; with any it reports the
/// arity error and the session keeps running.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::TooManyArguments("exit"));
        }
        std::process::exit(0);
    }
}
