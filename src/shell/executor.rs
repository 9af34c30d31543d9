use crate::error::ShellError;
use crate::parse;
use crate::path;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let command = match parse::parse_line(line) {
            Some(command) => command,
            // Whitespace-only input re-prompts without dispatching.
            None => return Ok(()),
        };

        let result = self.executor.execute(&command);

        // cd is the only command that moves the working directory;
        // refresh the displayed path after any success so the prompt
        // tracks it.
        if result.is_ok() {
            let cwd = std::env::current_dir()?;
            self.prompt_path = path::home_relative(
                &cwd.to_string_lossy(),
                &self.env.home.to_string_lossy(),
            );
        }

        result.map_err(ShellError::from)
    }
}
