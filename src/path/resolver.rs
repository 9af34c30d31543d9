use std::path::{Path, PathBuf};

use crate::core::commands::Utility;

/// Display form of an absolute path with the home directory shortened to `~`.
///
/// The match is a literal prefix comparison with no filesystem access; a
/// path outside the home directory (or shorter than it) comes back
/// unchanged.
pub fn home_relative(path: &str, home: &str) -> String {
    match path.strip_prefix(home) {
        Some(rest) => format!("~{}", rest),
        None => path.to_string(),
    }
}

/// On-disk location of a self-implemented utility: `<root>/bin/<name>`.
///
/// No existence check happens here; a missing binary surfaces later as a
/// launch error.
pub fn utility_path(root: &Path, utility: Utility) -> PathBuf {
    root.join("bin").join(utility.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_relative_inside_home() {
        assert_eq!(
            home_relative("/home/alice/projects", "/home/alice"),
            "~/projects"
        );
    }

    #[test]
    fn test_home_relative_exactly_home() {
        assert_eq!(home_relative("/home/alice", "/home/alice"), "~");
    }

    #[test]
    fn test_home_relative_outside_home() {
        assert_eq!(home_relative("/etc", "/home/alice"), "/etc");
    }

    #[test]
    fn test_home_relative_shorter_than_home() {
        assert_eq!(home_relative("/hom", "/home/alice"), "/hom");
    }

    #[test]
    fn test_utility_path_layout() {
        let path = utility_path(Path::new("/opt/neosh"), Utility::Ls);
        assert_eq!(path, PathBuf::from("/opt/neosh/bin/ls"));
    }

    #[test]
    fn test_utility_path_no_doubled_separator() {
        let path = utility_path(Path::new("/opt/neosh/"), Utility::Grep);
        assert_eq!(path.to_string_lossy(), "/opt/neosh/bin/grep");
    }
}
