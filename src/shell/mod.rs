//! Child-process execution.
//!
//! - [`CommandRunner`] - trait for spawning external tools, mockable in tests
//! - [`SystemRunner`] - real implementation backed by `std::process::Command`
//! - [`MockRunner`] - scripted implementation for unit tests

pub mod command;
pub mod mock;

pub use command::{CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
