//! Executable lookup on the system search path.

use std::env;
use std::path::Path;

/// Resolves executable names against the current system.
///
/// Kept behind a trait so orchestration tests do not depend on what
/// happens to be installed on the build machine.
pub trait ToolLocator: Send + Sync {
    /// Whether `program` resolves to an executable. Any lookup failure
    /// reads as "not installed".
    fn locate(&self, program: &str) -> bool;
}

/// Checks every `$PATH` entry for a regular file with the executable
/// bit set.
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, program: &str) -> bool {
        // Invocations with a path separator bypass the search path.
        if program.contains('/') {
            return is_executable(Path::new(program));
        }

        let Some(path_var) = env::var_os("PATH") else {
            return false;
        };

        env::split_paths(&path_var).any(|dir| is_executable(&dir.join(program)))
    }
}

#[cfg(unix)]
fn is_executable(candidate: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(candidate) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(candidate: &Path) -> bool {
    candidate.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_shell_on_the_path() {
        assert!(PathLocator.locate("sh"));
    }

    #[test]
    fn rejects_missing_programs() {
        assert!(!PathLocator.locate("sweepr-no-such-tool-0xdeadbeef"));
    }

    #[test]
    fn resolves_explicit_paths_directly() {
        assert!(PathLocator.locate("/bin/sh"));
        assert!(!PathLocator.locate("/bin/sweepr-no-such-tool"));
    }
}
