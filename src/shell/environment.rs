use std::env;
use std::ffi::CStr;
use std::path::PathBuf;

use crate::error::ShellError;

/// Identity and filesystem facts gathered once at startup and fixed for
/// the session.
#[derive(Debug, Clone)]
pub struct SessionEnvironment {
    pub home: PathBuf,
    pub user: String,
    pub host: String,
}

impl SessionEnvironment {
    /// Home comes from `$HOME` with the account database as fallback
    /// (`dirs` implements exactly that order); the user name from the
    /// account record, then `$USER`; the host from `gethostname`.
    pub fn discover() -> Result<Self, ShellError> {
        let home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
        let user = passwd_user_name()
            .or_else(|| env::var("USER").ok())
            .unwrap_or_else(|| "unknown".to_string());
        let host = host_name().unwrap_or_else(|| "localhost".to_string());

        Ok(SessionEnvironment { home, user, host })
    }
}

fn passwd_user_name() -> Option<String> {
    // getpwuid hands back a pointer into static storage; copy the name
    // out before anything else touches the passwd routines.
    unsafe {
        let record = libc::getpwuid(libc::geteuid());
        if record.is_null() {
            return None;
        }
        let name = (*record).pw_name;
        if name.is_null() {
            return None;
        }
        Some(CStr::from_ptr(name).to_string_lossy().into_owned())
    }
}

fn host_name() -> Option<String> {
    let mut buf = [0_u8; 256];
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(String::from_utf8_lossy(&buf[..end]).into_owned())
}
