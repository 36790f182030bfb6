//! Command execution against an explicit search path.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{BasecampError, Result};
use crate::path::SearchPath;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when inherited).
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            duration,
            success: false,
        }
    }
}

/// Trait for running external commands.
///
/// Programs are resolved through the supplied [`SearchPath`], which is also
/// handed to the child as its `PATH`. This keeps tools installed mid-run
/// reachable without mutating the parent process environment.
pub trait CommandRunner {
    /// Run a command with inherited stdio (the user sees installer output).
    fn run(&mut self, program: &str, args: &[&str], path: &SearchPath) -> Result<CommandResult>;

    /// Run a command capturing stdout.
    fn run_capture(
        &mut self,
        program: &str,
        args: &[&str],
        path: &SearchPath,
    ) -> Result<CommandResult>;

    /// Run a command feeding `input` to its stdin, stdio otherwise inherited.
    fn run_with_stdin(
        &mut self,
        program: &str,
        args: &[&str],
        path: &SearchPath,
        input: &str,
    ) -> Result<CommandResult>;
}

/// Real command runner backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Working directory for spawned commands (project root).
    cwd: Option<std::path::PathBuf>,
}

impl SystemRunner {
    /// Create a runner spawning commands in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner spawning commands in `cwd`.
    pub fn with_cwd(cwd: std::path::PathBuf) -> Self {
        Self { cwd: Some(cwd) }
    }

    fn prepare(&self, program: &str, args: &[&str], path: &SearchPath) -> Result<Command> {
        // Resolve to an absolute path ourselves: exec-time lookup would use
        // the parent's PATH, not the one we set on the child.
        let resolved = path
            .resolve(program)
            .ok_or_else(|| BasecampError::CommandFailed {
                command: render(program, args),
                code: None,
            })?;

        let mut cmd = Command::new(resolved);
        cmd.args(args);
        cmd.env("PATH", path.to_env_value());
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        Ok(cmd)
    }
}

/// Render a command line for error messages.
fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[&str], path: &SearchPath) -> Result<CommandResult> {
        let start = Instant::now();
        let command = render(program, args);
        tracing::debug!("Running: {}", command);

        let status = self
            .prepare(program, args, path)?
            .status()
            .map_err(|_| BasecampError::CommandFailed {
                command: command.clone(),
                code: None,
            })?;

        let duration = start.elapsed();
        if status.success() {
            Ok(CommandResult::success(String::new(), duration))
        } else {
            Ok(CommandResult::failure(status.code(), String::new(), duration))
        }
    }

    fn run_capture(
        &mut self,
        program: &str,
        args: &[&str],
        path: &SearchPath,
    ) -> Result<CommandResult> {
        let start = Instant::now();
        let command = render(program, args);
        tracing::debug!("Running (captured): {}", command);

        let output = self
            .prepare(program, args, path)?
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|_| BasecampError::CommandFailed {
                command: command.clone(),
                code: None,
            })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if output.status.success() {
            Ok(CommandResult::success(stdout, duration))
        } else {
            Ok(CommandResult::failure(output.status.code(), stdout, duration))
        }
    }

    fn run_with_stdin(
        &mut self,
        program: &str,
        args: &[&str],
        path: &SearchPath,
        input: &str,
    ) -> Result<CommandResult> {
        let start = Instant::now();
        let command = render(program, args);
        tracing::debug!("Running (piped stdin): {}", command);

        let mut child = self
            .prepare(program, args, path)?
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|_| BasecampError::CommandFailed {
                command: command.clone(),
                code: None,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
            // Drop closes the pipe so the child sees EOF.
        }

        let status = child.wait().map_err(|_| BasecampError::CommandFailed {
            command: command.clone(),
            code: None,
        })?;

        let duration = start.elapsed();
        if status.success() {
            Ok(CommandResult::success(String::new(), duration))
        } else {
            Ok(CommandResult::failure(status.code(), String::new(), duration))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_script(path: &Path, body: &str) {
        fs::write(path, body).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    #[test]
    fn run_capture_collects_stdout() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("greet"), "#!/bin/sh\necho hello\n");

        let path = SearchPath::new(vec![temp.path().to_path_buf()]);
        let mut runner = SystemRunner::new();
        let result = runner.run_capture("greet", &[], &path).unwrap();

        assert!(result.success);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_failure_exit_code() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("boom"), "#!/bin/sh\nexit 3\n");

        let path = SearchPath::new(vec![temp.path().to_path_buf()]);
        let mut runner = SystemRunner::new();
        let result = runner.run_capture("boom", &[], &path).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn unresolvable_program_is_an_error() {
        let path = SearchPath::new(vec![]);
        let mut runner = SystemRunner::new();
        let err = runner.run("no-such-tool", &["--version"], &path).unwrap_err();
        assert!(matches!(err, BasecampError::CommandFailed { .. }));
        assert!(err.to_string().contains("no-such-tool --version"));
    }

    #[cfg(unix)]
    #[test]
    fn run_with_stdin_feeds_input() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("marker");
        write_script(
            &temp.path().join("sink"),
            // The child's PATH is the threaded SearchPath (the temp dir only),
            // so system tools must be invoked by absolute path.
            &format!("#!/bin/sh\n/bin/cat > {}\n", marker.display()),
        );

        let path = SearchPath::new(vec![temp.path().to_path_buf()]);
        let mut runner = SystemRunner::new();
        let result = runner
            .run_with_stdin("sink", &[], &path, "print('bootstrap')\n")
            .unwrap();

        assert!(result.success);
        assert_eq!(fs::read_to_string(marker).unwrap(), "print('bootstrap')\n");
    }

    #[cfg(unix)]
    #[test]
    fn child_sees_the_threaded_path() {
        let temp = TempDir::new().unwrap();
        write_script(&temp.path().join("show-path"), "#!/bin/sh\necho \"$PATH\"\n");

        let extra = temp.path().join("extra");
        fs::create_dir_all(&extra).unwrap();

        let mut path = SearchPath::new(vec![temp.path().to_path_buf()]);
        path.push(extra.clone());

        let mut runner = SystemRunner::new();
        let result = runner.run_capture("show-path", &[], &path).unwrap();
        assert!(result.stdout.contains(extra.to_str().unwrap()));
    }
}
