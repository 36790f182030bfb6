//! Top-level setup routine.
//!
//! Runs the three phases in order: check for poetry (offering to install it),
//! configure it, bind a runtime, and install project dependencies.

use crate::error::{BasecampError, Result};
use crate::path::SearchPath;
use crate::shell::CommandRunner;
use crate::tools::{extract_version, poetry, python, POETRY};
use crate::ui::{Choice, ChoicePrompt, UserInterface};

/// How a setup run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Everything ran through to `poetry install`.
    Completed,
    /// The user declined to install poetry.
    Declined,
}

impl SetupOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            SetupOutcome::Completed => 0,
            SetupOutcome::Declined => 1,
        }
    }
}

/// Run the whole setup.
pub fn run(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &mut SearchPath,
) -> Result<SetupOutcome> {
    ui.show_header("Basecamp · project environment setup");

    let resolved = path.resolve(POETRY);
    match resolved {
        Some(resolved) => {
            report_poetry(ui, runner, path, &resolved.display().to_string())?;
            configure_poetry(ui, runner, path)?;
            let selected = python::select_runtime(ui, runner, path)?;
            if selected.is_none() {
                ui.message("Proceeding without binding an interpreter");
            }
        }
        None => {
            let prompt = ChoicePrompt::new("install_poetry", "poetry was not found. Install it now?");
            match ui.choose(&prompt)? {
                Choice::Yes => {
                    poetry::ensure_poetry(ui, runner, path, &installer_url())?;
                    // Runtime selection does not run on this branch; a fresh
                    // install goes straight to dependency installation and a
                    // re-run binds the interpreter. Kept from the original
                    // workflow rather than folded into the configured path.
                    ui.message("Run basecamp again to bind a specific interpreter version");
                }
                Choice::No => {
                    ui.message("Alright, nothing to do here. Goodbye!");
                    return Ok(SetupOutcome::Declined);
                }
            }
        }
    }

    install_dependencies(ui, runner, path)?;
    ui.success("Setup complete!");
    Ok(SetupOutcome::Completed)
}

/// The bootstrap script URL, overridable through `BASECAMP_INSTALLER_URL`
/// so hermetic runs can point at a local server.
fn installer_url() -> String {
    std::env::var("BASECAMP_INSTALLER_URL")
        .unwrap_or_else(|_| poetry::INSTALLER_URL.to_string())
}

/// Status line for an already-present poetry, with its version when parseable.
fn report_poetry(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &SearchPath,
    location: &str,
) -> Result<()> {
    let version = runner
        .run_capture(POETRY, &["--version"], path)
        .ok()
        .filter(|r| r.success)
        .and_then(|r| extract_version(&r.stdout));

    match version {
        Some(version) => ui.message(&format!("Found poetry {} at {}", version, location)),
        None => ui.message(&format!("Found poetry at {}", location)),
    }
    Ok(())
}

/// Keep virtual environments inside the project directory.
fn configure_poetry(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &SearchPath,
) -> Result<()> {
    let result = runner.run(POETRY, &["config", "virtualenvs.in-project", "true"], path)?;
    if !result.success {
        return Err(BasecampError::CommandFailed {
            command: "poetry config virtualenvs.in-project true".to_string(),
            code: result.exit_code,
        });
    }
    ui.message("Configured poetry to keep virtualenvs in the project");
    Ok(())
}

/// Resolve and install project dependencies.
fn install_dependencies(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &SearchPath,
) -> Result<()> {
    ui.message("Installing project dependencies");
    let result = runner.run(POETRY, &["install"], path)?;
    if !result.success {
        return Err(BasecampError::CommandFailed {
            command: "poetry install".to_string(),
            code: result.exit_code,
        });
    }
    Ok(())
}
