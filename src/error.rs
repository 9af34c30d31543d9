use crate::core::commands::CommandError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    HomeDirNotFound,
    WorkingDirUnavailable(std::io::Error),
    Command(CommandError),
    FlagError(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "neosh: readline error: {}", e),
            ShellError::Io(e) => write!(f, "neosh: {}", e),
            ShellError::HomeDirNotFound => write!(f, "neosh: home directory not found"),
            ShellError::WorkingDirUnavailable(e) => {
                write!(f, "neosh: could not determine the working directory: {}", e)
            }
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::FlagError(msg) => write!(f, "neosh: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "neosh: signal handler error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
