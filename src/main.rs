//! Basecamp CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use basecamp::cli::Cli;
use basecamp::path::SearchPath;
use basecamp::setup;
use basecamp::shell::SystemRunner;
use basecamp::ui::{create_ui, OutputMode};
use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("basecamp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basecamp=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Basecamp starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // Prompts fall back to plain line reads unless every stdio channel is a
    // terminal; piped answers must be read from stdin, not the TTY.
    let is_interactive =
        std::io::stdin().is_terminal() && Term::stdout().is_term() && Term::stderr().is_term();
    let mut ui = create_ui(is_interactive, output_mode);

    let mut runner = SystemRunner::with_cwd(project_root);
    let mut path = SearchPath::from_env();

    match setup::run(ui.as_mut(), &mut runner, &mut path) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
