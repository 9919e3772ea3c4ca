//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI invocations

use anyhow::anyhow;

use crate::cli::args::{Cli, Commands};
use crate::environment::CiContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for converted output and diagnostics
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI invocations to their implementations.
pub struct CommandDispatcher {
    ci: CiContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given CI context.
    pub fn new(ci: CiContext) -> Self {
        Self { ci }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let args = cli
            .convert_args()
            .ok_or_else(|| anyhow!("missing YAML file argument"))?;

        if cli.set {
            let cmd = super::set::SetCommand::new(args, self.ci.clone());
            cmd.execute(ui)
        } else {
            let cmd = super::convert::ConvertCommand::new(args);
            cmd.execute(ui)
        }
    }
}
