//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`PlainUI`] for piped/non-TTY input
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use basecamp::ui::{create_ui, OutputMode};
//!
//! // Use plain mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("poetry available");
//! ```

pub mod mock;
pub mod plain;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use plain::PlainUI;
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, BasecampTheme};

use crate::error::Result;

/// How many invalid answers are tolerated before a prompt gives up.
pub const MAX_PROMPT_ATTEMPTS: usize = 10;

/// Output verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Errors and prompts only.
    Quiet,
    /// Status messages and spinners.
    #[default]
    Normal,
    /// Everything, including per-command detail.
    Verbose,
}

impl OutputMode {
    /// Whether status messages are shown.
    pub fn shows_status(&self) -> bool {
        !matches!(self, OutputMode::Quiet)
    }

    /// Whether spinners are shown.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, OutputMode::Normal | OutputMode::Verbose)
    }
}

/// A numbered yes/no question.
#[derive(Debug, Clone)]
pub struct ChoicePrompt {
    /// Unique key for the prompt (used for env overrides and mock lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl ChoicePrompt {
    /// Create a prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

/// Answer to a [`ChoicePrompt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

/// Parse one line of prompt input.
///
/// Accepts the option number or a yes/no word, case-insensitively.
/// Anything else is invalid and the caller reprompts.
pub fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim().to_lowercase().as_str() {
        "1" | "y" | "yes" => Some(Choice::Yes),
        "2" | "n" | "no" => Some(Choice::No),
        _ => None,
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question, reprompting on invalid input.
    fn choose(&mut self, prompt: &ChoicePrompt) -> Result<Choice>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Create the appropriate UI for the current environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(PlainUI::new(mode))
    }
}
