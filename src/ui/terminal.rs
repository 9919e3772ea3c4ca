//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::{Result, Yaml2EnvError};

use super::{should_use_colors, OutputMode, UserInterface, Yaml2EnvTheme};

/// UI writing converted output to stdout and everything else to stderr.
pub struct TerminalUI {
    term: Term,
    theme: Yaml2EnvTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Yaml2EnvTheme::new()
        } else {
            Yaml2EnvTheme::plain()
        };

        Self {
            term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn emit(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| Yaml2EnvError::io("Failed to write output", e))
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_hint(msg)).ok();
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new(OutputMode::Normal);
        drop(ui);
    }

    #[test]
    fn emit_empty_text_succeeds() {
        let mut ui = TerminalUI::new(OutputMode::Quiet);
        ui.emit("").unwrap();
    }
}
