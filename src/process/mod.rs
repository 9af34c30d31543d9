use std::fmt;

pub mod executor;
pub mod jobs;
pub mod signal;

pub use executor::ProcessExecutor;
pub use jobs::{Job, JobTable};

/// How a successful launch left the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Foreground child, waited for and finished (or stopped).
    Completed,
    /// Background child, detached and registered with the job table.
    Background { seq: u32, pid: u32 },
}

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    SpawnFailed { name: String, source: std::io::Error },
    WaitFailed(std::io::Error),
    SignalSetup(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => {
                write!(f, "neosh: command not found: {}", cmd)
            }
            ProcessError::SpawnFailed { name, source } => {
                write!(f, "neosh: failed to start '{}': {}", name, source)
            }
            ProcessError::WaitFailed(e) => write!(f, "neosh: waitpid: {}", e),
            ProcessError::SignalSetup(msg) => write!(f, "neosh: signal setup: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
