//! External tool orchestration.
//!
//! - [`pipx`] - bootstrap the pipx helper through Homebrew
//! - [`poetry`] - ensure poetry is installed, with pipx and direct-download strategies
//! - [`python`] - bind poetry to an installed interpreter version

pub mod pipx;
pub mod poetry;
pub mod python;

/// The package-manager helper tool.
pub const PIPX: &str = "pipx";

/// The dependency manager.
pub const POETRY: &str = "poetry";

/// Extract a version number from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_semver() {
        assert_eq!(
            extract_version("Poetry (version 1.8.3)"),
            Some("1.8.3".to_string())
        );
    }

    #[test]
    fn extracts_two_part_version() {
        assert_eq!(
            extract_version("tool version 2.1"),
            Some("2.1".to_string())
        );
    }

    #[test]
    fn returns_none_without_version() {
        assert_eq!(extract_version("no numbers here"), None);
    }
}
