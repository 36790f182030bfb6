//! Basecamp - Interactive Python development environment bootstrap.
//!
//! Basecamp replaces an ad-hoc `bin/setup` shell script: it detects or
//! installs pipx, uses it (or the official bootstrap script) to install
//! poetry, configures poetry for in-project virtualenvs, binds a supported
//! interpreter version, and installs project dependencies.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`path`] - Explicit search-path model threaded into child processes
//! - [`setup`] - The top-level setup routine
//! - [`shell`] - Child-process execution
//! - [`tools`] - pipx, poetry, and interpreter orchestration
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use basecamp::path::SearchPath;
//!
//! // Availability check: absence is a normal outcome, not an error.
//! let path = SearchPath::from_env();
//! if path.resolve("poetry").is_none() {
//!     println!("poetry is not installed");
//! }
//! ```

pub mod cli;
pub mod error;
pub mod path;
pub mod setup;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{BasecampError, Result};
