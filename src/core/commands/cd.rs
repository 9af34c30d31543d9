use super::{Command, CommandError};
use std::env;
use std::path::{Path, PathBuf};

/// The `cd` built-in: no argument goes home, one argument goes there,
/// anything more is rejected without touching the working directory.
#[derive(Debug, Clone)]
pub struct CdCommand {
    home: PathBuf,
}

impl CdCommand {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let target: &Path = match args {
            [] => self.home.as_path(),
            [path] => Path::new(path),
            _ => return Err(CommandError::TooManyArguments("cd")),
        };

        env::set_current_dir(target).map_err(|source| CommandError::ChangeDirectory {
            path: target.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The working directory is process-global, so every scenario that
    // moves or observes it runs inside this one test.
    #[test]
    fn test_cd_directory_changes() {
        let temp_dir = env::temp_dir().canonicalize().expect("temp dir");

        // Explicit path argument.
        let cmd = CdCommand::new(PathBuf::from("/"));
        assert!(cmd
            .execute(&[temp_dir.to_string_lossy().to_string()])
            .is_ok());
        assert_eq!(env::current_dir().expect("cwd"), temp_dir);

        // No argument goes to the configured home.
        let cmd = CdCommand::new(PathBuf::from("/"));
        assert!(cmd.execute(&[]).is_ok());
        assert_eq!(env::current_dir().expect("cwd"), Path::new("/"));

        // A nonexistent target reports and leaves the directory alone.
        let result = cmd.execute(&["/path/that/does/not/exist".to_string()]);
        assert!(matches!(
            result,
            Err(CommandError::ChangeDirectory { ref path, .. })
                if path == "/path/that/does/not/exist"
        ));
        assert_eq!(env::current_dir().expect("cwd"), Path::new("/"));

        // Arity errors never touch the directory either.
        let result = cmd.execute(&["one".to_string(), "two".to_string()]);
        assert!(matches!(result, Err(CommandError::TooManyArguments("cd"))));
        assert_eq!(env::current_dir().expect("cwd"), Path::new("/"));
    }

    #[test]
    fn test_cd_error_message_shape() {
        let err = CommandError::ChangeDirectory {
            path: "/nope".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "cd: error in changing to '/nope': No such file or directory"
        );
    }
}
