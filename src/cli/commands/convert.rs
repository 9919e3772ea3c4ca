//! Convert command implementation.
//!
//! `yaml2env FILE` prints one assignment per variable for the chosen shell.

use crate::cli::args::ConvertArgs;
use crate::convert::{format_for_shell, load_document, yaml_to_env_vars};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The convert command implementation.
pub struct ConvertCommand {
    args: ConvertArgs,
}

impl ConvertCommand {
    /// Create a new convert command.
    pub fn new(args: ConvertArgs) -> Self {
        Self { args }
    }
}

impl Command for ConvertCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = load_document(&self.args.file)?;
        let vars = yaml_to_env_vars(&source, &self.args.prefix)?;
        let output = format_for_shell(&vars, &self.args.shell)?;

        ui.emit(&output)?;
        Ok(CommandResult::success())
    }
}
