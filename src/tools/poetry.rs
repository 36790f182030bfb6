//! Poetry installation with two strategies.
//!
//! Preferred: install through pipx. Fallback: fetch the official installer
//! script over HTTPS and execute it with `python3`. Either way the result is
//! verified by re-resolving `poetry` on the search path; a still-missing
//! poetry is a terminal failure.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BasecampError, Result};
use crate::path::SearchPath;
use crate::shell::CommandRunner;
use crate::ui::{Choice, ChoicePrompt, UserInterface};

use super::{pipx, PIPX, POETRY};

/// The official poetry bootstrap script.
pub const INSTALLER_URL: &str = "https://install.python-poetry.org";

/// Timeout for the bootstrap download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of [`ensure_poetry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoetryInstall {
    /// Poetry resolved on the search path after installing.
    Verified(PathBuf),
    /// Poetry was installed through a freshly bootstrapped pipx and is not
    /// re-verified here; the next run resolves it through the normal check.
    Unverified,
}

/// Ensure poetry is installed, installing it if needed.
///
/// With pipx available, installs through it and verifies. Without pipx the
/// user picks between bootstrapping pipx first (Yes) or fetching the
/// installer script directly (No).
pub fn ensure_poetry(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &mut SearchPath,
    installer_url: &str,
) -> Result<PoetryInstall> {
    if path.resolve(PIPX).is_some() {
        install_via_pipx(ui, runner, path)?;
        return verify(ui, path);
    }

    ui.message("pipx is the recommended way to install poetry, but it is not available.");
    let prompt = ChoicePrompt::new("install_pipx", "Install pipx with Homebrew first?");
    match ui.choose(&prompt)? {
        Choice::Yes => {
            pipx::install_pipx(ui, runner, path)?;
            install_via_pipx(ui, runner, path)?;
            // Early return without the verification step. The original
            // workflow treats this branch as an unfinished install that a
            // later poetry invocation surfaces; kept as-is rather than
            // folded into the verified path.
            Ok(PoetryInstall::Unverified)
        }
        Choice::No => {
            bootstrap(ui, runner, path, installer_url)?;
            verify(ui, path)
        }
    }
}

/// Install poetry through an available pipx.
fn install_via_pipx(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &SearchPath,
) -> Result<()> {
    let mut spinner = ui.start_spinner("Installing poetry with pipx");
    let result = runner.run(PIPX, &["install", POETRY], path)?;
    if !result.success {
        spinner.finish_error("pipx install poetry failed");
        return Err(BasecampError::InstallFailed {
            tool: POETRY.to_string(),
            message: format!("pipx install exited with code {:?}", result.exit_code),
        });
    }
    spinner.finish_success("poetry installed with pipx");
    Ok(())
}

/// Fetch the installer script and run it with python3.
///
/// A non-zero installer exit only warns; the verification step is the
/// authoritative gate for this path.
fn bootstrap(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &SearchPath,
    installer_url: &str,
) -> Result<()> {
    let mut spinner = ui.start_spinner("Downloading the poetry installer");
    let script = match fetch_installer_script(installer_url) {
        Ok(script) => {
            spinner.finish_success("Installer downloaded");
            script
        }
        Err(e) => {
            spinner.finish_error("Download failed");
            return Err(e);
        }
    };

    let mut spinner = ui.start_spinner("Running the poetry installer");
    let result = runner.run_with_stdin("python3", &["-"], path, &script)?;
    if result.success {
        spinner.finish_success("Installer finished");
    } else {
        spinner.finish_error("Installer reported an error");
        ui.warning(&format!(
            "The poetry installer exited with code {:?}; checking whether poetry is usable anyway",
            result.exit_code
        ));
    }
    Ok(())
}

/// Download the bootstrap script.
pub fn fetch_installer_script(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("basecamp")
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| BasecampError::DownloadFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| BasecampError::DownloadFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    response.text().map_err(|e| BasecampError::DownloadFailed {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Re-resolve poetry after an install attempt.
fn verify(ui: &mut dyn UserInterface, path: &SearchPath) -> Result<PoetryInstall> {
    match path.resolve(POETRY) {
        Some(resolved) => {
            ui.success(&format!("poetry available at {}", resolved.display()));
            Ok(PoetryInstall::Verified(resolved))
        }
        None => {
            ui.error("poetry installation failed");
            Err(BasecampError::VerificationFailed {
                tool: POETRY.to_string(),
            })
        }
    }
}
