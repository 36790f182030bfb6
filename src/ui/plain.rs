//! Plain UI for piped/non-TTY input.
//!
//! Used when stdin is not a terminal: answers are read line by line from
//! stdin, and `BASECAMP_PROMPT_<KEY>` environment variables can answer a
//! prompt without any input at all.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::{BasecampError, Result};

use super::{
    parse_choice, Choice, ChoicePrompt, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
    MAX_PROMPT_ATTEMPTS,
};

/// UI implementation for non-interactive stdin.
pub struct PlainUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl PlainUI {
    /// Create a new plain UI.
    pub fn new(mode: OutputMode) -> Self {
        // Collect BASECAMP_PROMPT_* env vars
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("BASECAMP_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

impl UserInterface for PlainUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn choose(&mut self, prompt: &ChoicePrompt) -> Result<Choice> {
        // Check environment override first
        let env_key = format!("BASECAMP_PROMPT_{}", prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return parse_choice(value).ok_or_else(|| BasecampError::InvalidPromptOverride {
                var: env_key.clone(),
                value: value.clone(),
            });
        }

        println!("{}", prompt.question);
        println!("  1) Yes");
        println!("  2) No");

        for _ in 0..MAX_PROMPT_ATTEMPTS {
            let line = self
                .read_line()?
                .ok_or_else(|| BasecampError::PromptClosed {
                    question: prompt.question.clone(),
                })?;

            match parse_choice(&line) {
                Some(choice) => return Ok(choice),
                None => println!("Please answer 1 (Yes) or 2 (No)."),
            }
        }

        Err(BasecampError::PromptExhausted {
            question: prompt.question.clone(),
            attempts: MAX_PROMPT_ATTEMPTS,
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}...", message);
        }
        Box::new(ProgressSpinner::hidden())
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
