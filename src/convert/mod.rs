//! YAML to environment variable conversion.
//!
//! The pipeline is linear:
//!
//! 1. [`load_document`] reads the YAML text from a file or stdin
//! 2. [`YamlNode::parse_document`] builds a typed tree
//! 3. [`flatten`] turns the tree into [`EnvVar`]s
//! 4. [`format_for_shell`] renders them for a shell dialect
//!
//! # Example
//!
//! ```
//! use yaml2env::convert::{format_for_shell, yaml_to_env_vars};
//!
//! let vars = yaml_to_env_vars("host: localhost", "APP").unwrap();
//! let script = format_for_shell(&vars, "bash").unwrap();
//! assert_eq!(script, "export APP_HOST='localhost'\n");
//! ```

pub mod flatten;
pub mod format;
pub mod input;
pub mod node;

pub use flatten::{build_key, flatten, yaml_to_env_vars, EnvVar};
pub use format::{escape_single_quote, format_for_shell, ShellType};
pub use input::{load_document, STDIN_PATH};
pub use node::{Scalar, YamlNode};
