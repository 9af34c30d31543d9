use std::path::Path;
use std::process::{Command, Stdio};

use super::jobs::JobTable;
use super::{signal, LaunchOutcome, ProcessError};

/// Launches child processes with inherited stdio.
///
/// The fork/exec split of a classic shell is collapsed into a single
/// atomic spawn returning a child handle; foreground launches then block
/// on `wait`, background launches drop the handle unawaited after
/// registering the pid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    /// Run `program` with `args`, waiting for it (foreground) or
    /// detaching it after registering a job (background).
    ///
    /// `display_name` is the name the user typed, used in diagnostics
    /// whatever path the launch resolved to.
    pub fn launch(
        &self,
        program: &Path,
        display_name: &str,
        args: &[String],
        background: bool,
        jobs: &mut JobTable,
    ) -> Result<LaunchOutcome, ProcessError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(display_name.to_string()));
            }
            Err(e) => {
                return Err(ProcessError::SpawnFailed {
                    name: display_name.to_string(),
                    source: e,
                });
            }
        };

        if background {
            let pid = child.id();
            let seq = jobs.register(pid);
            println!("[{}] {}", seq, pid);
            return Ok(LaunchOutcome::Background { seq, pid });
        }

        signal::ignore_sigint()?;
        // The exit status is waited on and discarded; the session exposes
        // no `$?`-style mechanism.
        child.wait().map_err(ProcessError::WaitFailed)?;
        Ok(LaunchOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_executable_is_command_not_found() {
        let executor = ProcessExecutor::new();
        let mut jobs = JobTable::new();
        let result = executor.launch(
            Path::new("/nonexistent/neosh-test-binary"),
            "neosh-test-binary",
            &[],
            false,
            &mut jobs,
        );
        assert!(matches!(result, Err(ProcessError::CommandNotFound(ref name))
            if name == "neosh-test-binary"));
        // Nothing was spawned, so nothing was registered.
        assert!(jobs.jobs().is_empty());
    }

    #[test]
    fn test_missing_background_executable_registers_no_job() {
        let executor = ProcessExecutor::new();
        let mut jobs = JobTable::new();
        let result = executor.launch(
            PathBuf::from("definitely-not-on-path-frobnicate").as_path(),
            "definitely-not-on-path-frobnicate",
            &["arg1".to_string()],
            true,
            &mut jobs,
        );
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
        assert!(jobs.jobs().is_empty());
    }

    #[test]
    fn test_foreground_launch_waits_for_child() {
        let executor = ProcessExecutor::new();
        let mut jobs = JobTable::new();
        let outcome = executor
            .launch(Path::new("true"), "true", &[], false, &mut jobs)
            .expect("launch `true`");
        assert_eq!(outcome, LaunchOutcome::Completed);
        assert!(jobs.jobs().is_empty());
    }

    #[test]
    fn test_background_launch_registers_job() {
        let executor = ProcessExecutor::new();
        let mut jobs = JobTable::new();
        let outcome = executor
            .launch(Path::new("true"), "true", &[], true, &mut jobs)
            .expect("launch `true` in background");
        match outcome {
            LaunchOutcome::Background { seq, pid } => {
                assert_eq!(seq, 1);
                assert_eq!(jobs.jobs().len(), 1);
                assert_eq!(jobs.jobs()[0], crate::process::Job { seq: 1, pid });
            }
            other => panic!("expected background outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_foreground_child_is_not_an_error() {
        // A child that runs but exits nonzero completes normally from the
        // launcher's point of view; its status is discarded.
        let executor = ProcessExecutor::new();
        let mut jobs = JobTable::new();
        let outcome = executor
            .launch(Path::new("false"), "false", &[], false, &mut jobs)
            .expect("launch `false`");
        assert_eq!(outcome, LaunchOutcome::Completed);
    }
}
