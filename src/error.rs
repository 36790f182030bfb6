//! Error types for Basecamp operations.
//!
//! This module defines [`BasecampError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Install steps return structured results; callers branch on them instead
//!   of re-probing availability after the fact
//! - Use `anyhow::Error` (via `BasecampError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for Basecamp operations.
#[derive(Debug, Error)]
pub enum BasecampError {
    /// A spawned command could not be started or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An installer step failed in a way that blocks the rest of the setup.
    #[error("Failed to install {tool}: {message}")]
    InstallFailed { tool: String, message: String },

    /// A tool is still missing after an install attempt.
    #[error("{tool} installation failed: not found on the search path after install")]
    VerificationFailed { tool: String },

    /// Fetching the bootstrap installer script failed.
    #[error("Failed to download {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// The user gave invalid answers until the attempt limit was reached.
    #[error("No valid answer after {attempts} attempts: {question}")]
    PromptExhausted { question: String, attempts: usize },

    /// A prompt override environment variable held an unparseable answer.
    #[error("Invalid answer in {var}: {value:?} (expected 1/2, yes/no)")]
    InvalidPromptOverride { var: String, value: String },

    /// Input was closed (EOF) while waiting for an answer.
    #[error("Input closed while waiting for an answer: {question}")]
    PromptClosed { question: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Basecamp operations.
pub type Result<T> = std::result::Result<T, BasecampError>;
