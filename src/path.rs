//! Explicit search-path model.
//!
//! Installers change what is reachable on PATH mid-run (freshly installed
//! pipx lands in `~/.local/bin`, which the login shell knows about but this
//! process does not). Instead of mutating the process environment, Basecamp
//! carries a [`SearchPath`] value that install steps append to and that every
//! child-process invocation receives explicitly.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// An ordered list of directories used to resolve executables.
///
/// Append-only for the lifetime of a run; entries are deduplicated.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Build from an explicit list of directories.
    pub fn new(entries: Vec<PathBuf>) -> Self {
        let mut path = Self::default();
        for entry in entries {
            path.push(entry);
        }
        path
    }

    /// Build from the process `PATH` environment variable.
    pub fn from_env() -> Self {
        let entries = std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        Self::new(entries)
    }

    /// The directories in resolution order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Whether a directory is already on the path.
    pub fn contains(&self, dir: &Path) -> bool {
        self.entries.iter().any(|e| e == dir)
    }

    /// Append a directory. No-op if already present.
    pub fn push(&mut self, dir: PathBuf) {
        if !self.contains(&dir) {
            self.entries.push(dir);
        }
    }

    /// Resolve an executable name to its first match on the path.
    ///
    /// Returns the first entry that exists and is executable. Absence is a
    /// normal outcome, not an error. Does NOT shell out to `which` — `which`
    /// behavior varies across systems and is sometimes a shell builtin with
    /// inconsistent error handling.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.entries {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Render as a `PATH`-style value for a child process environment.
    pub fn to_env_value(&self) -> OsString {
        std::env::join_paths(&self.entries).unwrap_or_default()
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("poetry"));
        create_fake_binary(&dir_b.join("poetry"));

        let path = SearchPath::new(vec![dir_a.clone(), dir_b]);
        assert_eq!(path.resolve("poetry"), Some(dir_a.join("poetry")));
    }

    #[test]
    fn resolve_returns_none_when_absent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        let path = SearchPath::new(vec![dir]);
        assert!(path.resolve("poetry").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_non_executable_file(&dir_a.join("poetry"));
        create_fake_binary(&dir_b.join("poetry"));

        let path = SearchPath::new(vec![dir_a, dir_b.clone()]);
        assert_eq!(path.resolve("poetry"), Some(dir_b.join("poetry")));
    }

    #[test]
    fn push_appends_at_end() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("python3"));
        create_fake_binary(&dir_b.join("python3"));

        let mut path = SearchPath::new(vec![dir_a.clone()]);
        path.push(dir_b);

        // Existing entries keep priority over appended ones.
        assert_eq!(path.resolve("python3"), Some(dir_a.join("python3")));
    }

    #[test]
    fn push_deduplicates() {
        let dir = PathBuf::from("/usr/local/bin");
        let mut path = SearchPath::new(vec![dir.clone()]);
        path.push(dir.clone());
        assert_eq!(path.entries().len(), 1);
        assert!(path.contains(&dir));
    }

    #[test]
    fn to_env_value_joins_entries() {
        let path = SearchPath::new(vec![PathBuf::from("/bin"), PathBuf::from("/usr/bin")]);
        let value = path.to_env_value();
        let parsed: Vec<PathBuf> = std::env::split_paths(&value).collect();
        assert_eq!(parsed, vec![PathBuf::from("/bin"), PathBuf::from("/usr/bin")]);
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }
}
