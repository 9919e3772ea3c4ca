//! yaml2env - Project YAML file content into shell environment variables.
//!
//! yaml2env flattens a YAML document into `KEY=value` pairs and either
//! prints them as assignments for a shell or applies them directly
//! (including the GitHub Actions `GITHUB_ENV` file in CI).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`convert`] - YAML parsing, flattening, and shell formatting
//! - [`environment`] - CI detection
//! - [`error`] - Error types and result aliases
//! - [`sink`] - Destinations for `--set` (process environment, CI file)
//! - [`ui`] - Terminal output and test doubles
//!
//! # Example
//!
//! ```
//! use yaml2env::convert::{format_for_shell, yaml_to_env_vars};
//!
//! let vars = yaml_to_env_vars("items:\n  - first\n  - second", "").unwrap();
//! let script = format_for_shell(&vars, "cmd").unwrap();
//! assert_eq!(script, "set ITEMS_0=first\nset ITEMS_1=second\n");
//! ```

pub mod cli;
pub mod convert;
pub mod environment;
pub mod error;
pub mod sink;
pub mod ui;

pub use error::{Result, Yaml2EnvError};
