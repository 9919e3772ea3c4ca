//! Set command implementation.
//!
//! `yaml2env --set FILE` applies the variables to the current process and,
//! under GitHub Actions, appends them to the `GITHUB_ENV` file so later
//! steps pick them up.

use std::path::Path;

use crate::cli::args::ConvertArgs;
use crate::convert::{load_document, yaml_to_env_vars, EnvVar};
use crate::environment::CiContext;
use crate::error::Result;
use crate::sink::{apply_env_vars, CiEnvFileSink, EnvSink, ProcessEnvSink};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The set command implementation.
pub struct SetCommand {
    args: ConvertArgs,
    ci: CiContext,
}

impl SetCommand {
    /// Create a new set command.
    pub fn new(args: ConvertArgs, ci: CiContext) -> Self {
        Self { args, ci }
    }

    /// Run with an explicit sink standing in for the process environment.
    ///
    /// The CI export file, when the context names one, is written after
    /// `process` succeeds.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        process: &mut dyn EnvSink,
    ) -> Result<CommandResult> {
        let source = load_document(&self.args.file)?;
        let vars = yaml_to_env_vars(&source, &self.args.prefix)?;

        if !self.ci.is_recognized() {
            warn_not_ci(ui, &self.args.file);
        }

        self.apply(&vars, process)?;
        tracing::debug!("Set {} environment variables", vars.len());
        Ok(CommandResult::success())
    }

    fn apply(&self, vars: &[EnvVar], process: &mut dyn EnvSink) -> Result<()> {
        match &self.ci.env_file {
            Some(path) => {
                let mut file = CiEnvFileSink::new(path);
                apply_env_vars(vars, &mut [process, &mut file])
            }
            None => apply_env_vars(vars, &mut [process]),
        }
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui, &mut ProcessEnvSink::new())
    }
}

fn warn_not_ci(ui: &mut dyn UserInterface, file: &Path) {
    let file = file.display();
    ui.warning("--set flag only sets variables in the current process.");
    ui.message(&format!(
        "For interactive shells, use: eval \"$(yaml2env {})\"",
        file
    ));
    ui.message(&format!(
        "Or for PowerShell: Invoke-Expression (yaml2env {} --shell powershell | Out-String)",
        file
    ));
}
