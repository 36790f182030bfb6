//! Runtime version selection.
//!
//! Probes for the interpreters the project supports, newest first, and binds
//! poetry's environment to the first one found. Neither being installed is
//! non-fatal; the user gets manual instructions and the setup proceeds.

use crate::error::{BasecampError, Result};
use crate::path::SearchPath;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::POETRY;

/// Interpreter versions to probe, in priority order.
pub const RUNTIME_CANDIDATES: &[&str] = &["python3.13", "python3.9"];

/// Bind poetry to the first available interpreter.
///
/// Returns the selected interpreter name, or `None` when no candidate is
/// installed.
pub fn select_runtime(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &SearchPath,
) -> Result<Option<&'static str>> {
    for candidate in RUNTIME_CANDIDATES {
        if path.resolve(candidate).is_none() {
            tracing::debug!("{} not found on the search path", candidate);
            continue;
        }

        let result = runner.run(POETRY, &["env", "use", candidate], path)?;
        if !result.success {
            return Err(BasecampError::CommandFailed {
                command: format!("poetry env use {}", candidate),
                code: result.exit_code,
            });
        }
        ui.success(&format!("poetry environment bound to {}", candidate));
        return Ok(Some(candidate));
    }

    ui.warning(&format!(
        "None of {} found; install one and run `poetry env use <python>` manually",
        RUNTIME_CANDIDATES.join(", ")
    ));
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

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

    #[test]
    fn prefers_the_newest_interpreter_when_both_exist() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3.13"));
        create_fake_binary(&temp.path().join("python3.9"));

        let mut ui = MockUI::new();
        let mut runner = MockRunner::new();
        let path = SearchPath::new(vec![temp.path().to_path_buf()]);

        let selected = select_runtime(&mut ui, &mut runner, &path).unwrap();
        assert_eq!(selected, Some("python3.13"));
        assert!(runner.ran("poetry env use python3.13"));
        assert!(!runner.ran("poetry env use python3.9"));
    }

    #[test]
    fn falls_back_to_the_older_interpreter() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3.9"));

        let mut ui = MockUI::new();
        let mut runner = MockRunner::new();
        let path = SearchPath::new(vec![temp.path().to_path_buf()]);

        let selected = select_runtime(&mut ui, &mut runner, &path).unwrap();
        assert_eq!(selected, Some("python3.9"));
        assert!(runner.ran("poetry env use python3.9"));
    }

    #[test]
    fn no_interpreter_is_non_fatal() {
        let temp = TempDir::new().unwrap();

        let mut ui = MockUI::new();
        let mut runner = MockRunner::new();
        let path = SearchPath::new(vec![temp.path().to_path_buf()]);

        let selected = select_runtime(&mut ui, &mut runner, &path).unwrap();
        assert_eq!(selected, None);
        assert!(runner.invocations().is_empty());
        assert!(ui.output_contains("poetry env use"));
    }

    #[test]
    fn env_use_failure_propagates() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("python3.13"));

        let mut ui = MockUI::new();
        let mut runner = MockRunner::new();
        runner.fail_on("poetry env use python3.13", 1);
        let path = SearchPath::new(vec![temp.path().to_path_buf()]);

        let err = select_runtime(&mut ui, &mut runner, &path).unwrap_err();
        assert!(matches!(err, BasecampError::CommandFailed { .. }));
    }
}
