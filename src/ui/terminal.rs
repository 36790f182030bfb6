//! Interactive terminal UI.

use console::Term;
use dialoguer::Input;
use std::io::Write;

use crate::error::{BasecampError, Result};

use super::{
    parse_choice, should_use_colors, BasecampTheme, Choice, ChoicePrompt, OutputMode,
    ProgressSpinner, SpinnerHandle, UserInterface, MAX_PROMPT_ATTEMPTS,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: BasecampTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            BasecampTheme::new()
        } else {
            BasecampTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

/// Convert dialoguer errors to BasecampError.
fn map_dialoguer_err(e: dialoguer::Error) -> BasecampError {
    BasecampError::Io(e.into())
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn choose(&mut self, prompt: &ChoicePrompt) -> Result<Choice> {
        writeln!(self.term, "{}", self.theme.highlight.apply_to(&prompt.question)).ok();
        writeln!(self.term, "  1) Yes").ok();
        writeln!(self.term, "  2) No").ok();

        for _ in 0..MAX_PROMPT_ATTEMPTS {
            let answer: String = Input::<String>::new()
                .with_prompt("Enter choice")
                .allow_empty(true)
                .interact_text_on(&self.term)
                .map_err(map_dialoguer_err)?;

            match parse_choice(&answer) {
                Some(choice) => return Ok(choice),
                None => {
                    writeln!(
                        self.term,
                        "{}",
                        self.theme
                            .dim
                            .apply_to("Please answer 1 (Yes) or 2 (No).")
                    )
                    .ok();
                }
            }
        }

        Err(BasecampError::PromptExhausted {
            question: prompt.question.clone(),
            attempts: MAX_PROMPT_ATTEMPTS,
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
