//! pipx bootstrap through Homebrew.
//!
//! Installs the pipx helper with the host package manager, runs pipx's own
//! path registration, and appends pipx's binary directory to the run's
//! [`SearchPath`] so tools it installs are immediately resolvable.

use std::path::PathBuf;

use crate::error::{BasecampError, Result};
use crate::path::SearchPath;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::PIPX;

/// Where pipx places the executables it manages.
pub fn user_bin_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".local").join("bin"))
}

/// Install pipx via Homebrew and make its bin directory resolvable.
///
/// `brew install` failure blocks the setup. An index-refresh or
/// `pipx ensurepath` failure only affects later shells, so both degrade
/// to warnings.
pub fn install_pipx(
    ui: &mut dyn UserInterface,
    runner: &mut dyn CommandRunner,
    path: &mut SearchPath,
) -> Result<()> {
    let mut spinner = ui.start_spinner("Updating Homebrew");
    let update = runner.run("brew", &["update"], path)?;
    if update.success {
        spinner.finish_success("Homebrew index updated");
    } else {
        spinner.finish_error("brew update failed");
        ui.warning("Continuing with a stale Homebrew index");
    }

    let mut spinner = ui.start_spinner("Installing pipx with Homebrew");
    let install = runner.run("brew", &["install", PIPX], path)?;
    if !install.success {
        spinner.finish_error("brew install pipx failed");
        return Err(BasecampError::InstallFailed {
            tool: PIPX.to_string(),
            message: format!("brew install exited with code {:?}", install.exit_code),
        });
    }
    spinner.finish_success("pipx installed");

    // Registers ~/.local/bin in the user's shell profile for future sessions.
    let ensure = runner.run(PIPX, &["ensurepath"], path)?;
    if !ensure.success {
        ui.warning("pipx ensurepath failed; add ~/.local/bin to PATH manually");
    }

    // This run resolves pipx-managed tools through the threaded search path.
    if let Some(bin) = user_bin_dir() {
        tracing::debug!("Appending {} to the search path", bin.display());
        path.push(bin);
    }

    Ok(())
}
