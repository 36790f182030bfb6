//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] and records every invocation
//! for later assertion. Individual commands can be scripted to fail or to
//! produce captured output.
//!
//! # Example
//!
//! ```
//! use basecamp::path::SearchPath;
//! use basecamp::shell::{CommandRunner, MockRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.set_stdout("poetry --version", "Poetry (version 1.8.3)");
//!
//! let path = SearchPath::default();
//! let result = runner.run_capture("poetry", &["--version"], &path).unwrap();
//! assert!(result.stdout.contains("1.8.3"));
//! assert_eq!(runner.invocations(), &["poetry --version".to_string()]);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use crate::error::Result;
use crate::path::SearchPath;

use super::command::{CommandResult, CommandRunner};

/// Scripted command runner that records invocations.
#[derive(Debug, Default)]
pub struct MockRunner {
    invocations: Vec<String>,
    stdin_payloads: Vec<(String, String)>,
    failures: HashMap<String, i32>,
    stdouts: HashMap<String, String>,
}

impl MockRunner {
    /// Create a mock where every command succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a command line (e.g. `"brew install pipx"`) to fail.
    pub fn fail_on(&mut self, command: &str, exit_code: i32) {
        self.failures.insert(command.to_string(), exit_code);
    }

    /// Script captured stdout for a command line.
    pub fn set_stdout(&mut self, command: &str, stdout: &str) {
        self.stdouts.insert(command.to_string(), stdout.to_string());
    }

    /// All command lines run so far, in order.
    pub fn invocations(&self) -> &[String] {
        &self.invocations
    }

    /// Whether a command line was run.
    pub fn ran(&self, command: &str) -> bool {
        self.invocations.iter().any(|c| c == command)
    }

    /// Stdin payloads fed to commands, as `(command line, input)` pairs.
    pub fn stdin_payloads(&self) -> &[(String, String)] {
        &self.stdin_payloads
    }

    fn record(&mut self, program: &str, args: &[&str]) -> CommandResult {
        let command = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };
        self.invocations.push(command.clone());

        let stdout = self.stdouts.get(&command).cloned().unwrap_or_default();
        match self.failures.get(&command) {
            Some(code) => CommandResult::failure(Some(*code), stdout, Duration::ZERO),
            None => CommandResult::success(stdout, Duration::ZERO),
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, program: &str, args: &[&str], _path: &SearchPath) -> Result<CommandResult> {
        Ok(self.record(program, args))
    }

    fn run_capture(
        &mut self,
        program: &str,
        args: &[&str],
        _path: &SearchPath,
    ) -> Result<CommandResult> {
        Ok(self.record(program, args))
    }

    fn run_with_stdin(
        &mut self,
        program: &str,
        args: &[&str],
        _path: &SearchPath,
        input: &str,
    ) -> Result<CommandResult> {
        let result = self.record(program, args);
        let command = self.invocations.last().cloned().unwrap_or_default();
        self.stdin_payloads.push((command, input.to_string()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_invocations_in_order() {
        let mut runner = MockRunner::new();
        let path = SearchPath::default();
        runner.run("brew", &["update"], &path).unwrap();
        runner.run("brew", &["install", "pipx"], &path).unwrap();

        assert_eq!(
            runner.invocations(),
            &["brew update".to_string(), "brew install pipx".to_string()]
        );
        assert!(runner.ran("brew update"));
        assert!(!runner.ran("pipx ensurepath"));
    }

    #[test]
    fn scripted_failure_is_returned() {
        let mut runner = MockRunner::new();
        runner.fail_on("brew install pipx", 1);

        let path = SearchPath::default();
        let result = runner.run("brew", &["install", "pipx"], &path).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn stdin_payloads_are_captured() {
        let mut runner = MockRunner::new();
        let path = SearchPath::default();
        runner
            .run_with_stdin("python3", &["-"], &path, "script body")
            .unwrap();

        assert_eq!(
            runner.stdin_payloads(),
            &[("python3 -".to_string(), "script body".to_string())]
        );
    }
}
