//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers are queued as raw
//! input lines, so tests can exercise the invalid-input reprompt loop.
//!
//! # Example
//!
//! ```
//! use basecamp::ui::{Choice, ChoicePrompt, MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_answers("install_poetry", vec!["banana", "1"]);
//!
//! let prompt = ChoicePrompt::new("install_poetry", "Install poetry now?");
//! assert_eq!(ui.choose(&prompt).unwrap(), Choice::Yes);
//! assert_eq!(ui.reprompts(), 1);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{BasecampError, Result};

use super::{
    parse_choice, Choice, ChoicePrompt, OutputMode, SpinnerHandle, UserInterface,
    MAX_PROMPT_ATTEMPTS,
};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-queued prompt answers.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    prompts_shown: Vec<String>,
    answers: HashMap<String, VecDeque<String>>,
    reprompts: usize,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Queue raw input lines for a prompt key, consumed in order.
    ///
    /// Invalid lines exercise the reprompt loop just like real input.
    pub fn queue_answers(&mut self, key: &str, answers: Vec<&str>) {
        let queue = answers.into_iter().map(|s| s.to_string()).collect();
        self.answers.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Keys of prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// How many times invalid input forced a reprompt.
    pub fn reprompts(&self) -> usize {
        self.reprompts
    }

    /// Whether any captured output contains `needle`.
    pub fn output_contains(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|m| m.contains(needle))
    }
}

/// Spinner that records nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn choose(&mut self, prompt: &ChoicePrompt) -> Result<Choice> {
        self.prompts_shown.push(prompt.key.clone());

        let Some(mut queue) = self.answers.remove(&prompt.key) else {
            return Err(BasecampError::PromptClosed {
                question: prompt.question.clone(),
            });
        };

        let mut result = Err(BasecampError::PromptExhausted {
            question: prompt.question.clone(),
            attempts: MAX_PROMPT_ATTEMPTS,
        });
        for _ in 0..MAX_PROMPT_ATTEMPTS {
            match queue.pop_front() {
                None => {
                    result = Err(BasecampError::PromptClosed {
                        question: prompt.question.clone(),
                    });
                    break;
                }
                Some(line) => match parse_choice(&line) {
                    Some(choice) => {
                        result = Ok(choice);
                        break;
                    }
                    None => self.reprompts += 1,
                },
            }
        }

        self.answers.insert(prompt.key.clone(), queue);
        result
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
