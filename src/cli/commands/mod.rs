//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`]:
//! - `yaml2env FILE` prints assignments ([`convert::ConvertCommand`])
//! - `yaml2env --set FILE` applies them ([`set::SetCommand`])
//! - `yaml2env completions SHELL` prints completion scripts

pub mod completions;
pub mod convert;
pub mod dispatcher;
pub mod set;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
