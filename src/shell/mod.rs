use std::env;

use rustyline::DefaultEditor;

mod environment;
mod executor;

use crate::{
    core::commands::CommandExecutor, error::ShellError, flags::Flags, path,
    prompt::PromptRenderer,
};

use environment::SessionEnvironment;
use executor::CommandHandler;

/// The interactive session: all mutable state lives here and is threaded
/// through the components by reference, never in globals.
pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) flags: Flags,
    pub(crate) env: SessionEnvironment,
    pub(crate) prompt_path: String,
    pub(crate) renderer: PromptRenderer,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let env = SessionEnvironment::discover()?;

        // The interpreter root is wherever the session started; the
        // bundled utilities are expected under its bin/ subdirectory.
        // Without a readable working directory there is no session state
        // to build, so this failure is fatal.
        let shell_root = env::current_dir().map_err(ShellError::WorkingDirUnavailable)?;
        let prompt_path = path::home_relative(
            &shell_root.to_string_lossy(),
            &env.home.to_string_lossy(),
        );

        let executor = CommandExecutor::new(env.home.clone(), shell_root);

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to leave neosh");
        })?;

        Ok(Shell {
            editor,
            flags,
            env,
            prompt_path,
            renderer: PromptRenderer::new(),
            executor,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self
                .renderer
                .render(&self.env.user, &self.env.host, &self.prompt_path);

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if let Err(e) = self.execute_line(&line) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", e);
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => continue,
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("neosh: {}", e);
                    }
                    continue;
                }
            }
        }
        Ok(())
    }
}
