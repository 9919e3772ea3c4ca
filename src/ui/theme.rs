//! Visual theme and styling.

use console::Style;

/// Styles for messages written to stderr.
#[derive(Debug, Clone)]
pub struct Yaml2EnvTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for contextual hints such as suggested commands (dim).
    pub hint: Style,
}

impl Default for Yaml2EnvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Yaml2EnvTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().for_stderr().color256(208),
            error: Style::new().for_stderr().red().bold(),
            hint: Style::new().for_stderr().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an indented hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("  {}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled for stderr.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_warning() {
        let theme = Yaml2EnvTheme::plain();
        let msg = theme.format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = Yaml2EnvTheme::plain();
        let msg = theme.format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_hint() {
        let theme = Yaml2EnvTheme::plain();
        assert_eq!(theme.format_hint("eval"), "  eval");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = Yaml2EnvTheme::default();
        let new = Yaml2EnvTheme::new();
        assert_eq!(default.format_error("test"), new.format_error("test"));
    }
}
