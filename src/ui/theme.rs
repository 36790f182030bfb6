//! Visual theme and styling.

use console::{Style, Term};

/// Basecamp's visual theme.
#[derive(Debug, Clone)]
pub struct BasecampTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for BasecampTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BasecampTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message with its marker.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format a warning message with its marker.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    /// Format an error message with its marker.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_does_not_color() {
        let theme = BasecampTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_error("bad"), "✗ bad");
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
    }

    #[test]
    fn header_contains_title() {
        let theme = BasecampTheme::plain();
        assert_eq!(theme.format_header("Basecamp"), "Basecamp");
    }
}
