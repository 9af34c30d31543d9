use crate::process::ProcessError;

use libc::{sighandler_t, signal, SIGINT, SIG_ERR};

extern "C" fn sigint_noop(_: i32) {
    // Nothing to do here; the foreground child owns the interrupt.
}

/// Make the interpreter ignore SIGINT while it waits on a foreground
/// child, so Ctrl-C reaches the child instead of the shell.
pub fn ignore_sigint() -> Result<(), ProcessError> {
    let previous = unsafe { signal(SIGINT, sigint_noop as sighandler_t) };
    if previous == SIG_ERR {
        return Err(ProcessError::SignalSetup(
            std::io::Error::last_os_error().to_string(),
        ));
    }
    Ok(())
}
