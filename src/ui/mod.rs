//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing everything for tests
//!
//! Converted variables are written with [`UserInterface::emit`] and are
//! the only thing that ever reaches stdout. Warnings and errors go to
//! stderr so `eval "$(yaml2env file.yaml)"` stays clean.
//!
//! # Example
//!
//! ```
//! use yaml2env::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit("export KEY='value'\n").unwrap();
//! ui.warning("Not running in CI");
//! assert_eq!(ui.emitted(), "export KEY='value'\n");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Yaml2EnvTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write converted output verbatim to stdout.
    fn emit(&mut self, text: &str) -> Result<()>;

    /// Display an informational message on stderr.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
