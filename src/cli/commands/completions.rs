//! Shell completions generation.
//!
//! The `yaml2env completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script.
    pub fn render(&self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "yaml2env", &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.emit(&self.render())?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let output = cmd.render();
        assert!(output.contains("yaml2env"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_powershell_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs {
            shell: Shell::PowerShell,
        });
        assert!(cmd.render().contains("yaml2env"));
    }

    #[test]
    fn execute_emits_script() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.emitted().contains("yaml2env"));
    }
}
