//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Project YAML file content into shell environment.
///
/// yaml2env reads a YAML file and outputs shell commands to set
/// environment variables from the YAML content.
#[derive(Debug, Parser)]
#[command(name = "yaml2env")]
#[command(author, version, about, long_about)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// YAML file to convert ("-" reads stdin)
    #[arg(value_name = "YAML_FILE", required = true)]
    pub file: Option<PathBuf>,

    /// Shell type: bash, sh, powershell, ps1, cmd
    #[arg(short, long, default_value = "bash", env = "YAML2ENV_SHELL")]
    pub shell: String,

    /// Prefix for environment variable names
    #[arg(short, long, default_value = "", env = "YAML2ENV_PREFIX")]
    pub prefix: String,

    /// Set environment variables in CI/CD (GitHub Actions).
    ///
    /// For interactive shells use:
    ///   Bash/sh: eval "$(yaml2env file.yaml)"
    ///   PowerShell: Invoke-Expression (yaml2env file.yaml --shell powershell | Out-String)
    ///
    /// Cannot be combined with --shell on the command line.
    #[arg(long, verbatim_doc_comment)]
    pub set: bool,

    /// Suppress advisory warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse arguments, rejecting `--set` together with an explicit `--shell`.
    ///
    /// A shell taken from `YAML2ENV_SHELL` does not conflict with `--set`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(args)?;
        let cli = Self::from_arg_matches(&matches).map_err(|e| e.format(&mut command))?;

        if cli.set && matches.value_source("shell") == Some(ValueSource::CommandLine) {
            return Err(command.error(
                ErrorKind::ArgumentConflict,
                "the argument '--set' cannot be used with '--shell <SHELL>'",
            ));
        }

        Ok(cli)
    }

    /// Conversion arguments, or `None` when a subcommand was given instead.
    pub fn convert_args(&self) -> Option<ConvertArgs> {
        self.file.as_ref().map(|file| ConvertArgs {
            file: file.clone(),
            shell: self.shell.clone(),
            prefix: self.prefix.clone(),
        })
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by the conversion modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    /// Input document path, or "-" for stdin.
    pub file: PathBuf,
    /// Output shell dialect name.
    pub shell: String,
    /// Prefix for top-level keys.
    pub prefix: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
