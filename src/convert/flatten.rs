//! YAML flattening.
//!
//! Walks a [`YamlNode`] depth-first and turns every scalar leaf into an
//! [`EnvVar`] whose key is the uppercased, underscore-joined path from the
//! document root.

use std::fmt;

use crate::error::Result;

use super::node::YamlNode;

/// A single environment variable assignment.
///
/// Keys are not deduplicated: two YAML paths that normalize to the same
/// key both appear, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for EnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Parse a YAML document and flatten it into environment variables.
///
/// # Example
///
/// ```
/// use yaml2env::convert::{yaml_to_env_vars, EnvVar};
///
/// let vars = yaml_to_env_vars("database:\n  host: localhost\n  port: 5432", "").unwrap();
/// assert_eq!(
///     vars,
///     vec![
///         EnvVar::new("DATABASE_HOST", "localhost"),
///         EnvVar::new("DATABASE_PORT", "5432"),
///     ]
/// );
/// ```
pub fn yaml_to_env_vars(source: &str, prefix: &str) -> Result<Vec<EnvVar>> {
    let tree = YamlNode::parse_document(source)?;
    let vars = flatten(&tree, prefix);
    tracing::debug!("Flattened document into {} variables", vars.len());
    Ok(vars)
}

/// Flatten a node tree into environment variables.
///
/// Mapping entries are visited in document order and sequence elements
/// by zero-based index, so the same tree always yields the same list.
pub fn flatten(tree: &YamlNode, prefix: &str) -> Vec<EnvVar> {
    let mut vars = Vec::new();
    flatten_into("", tree, prefix, &mut vars);
    vars
}

fn flatten_into(parent: &str, node: &YamlNode, prefix: &str, vars: &mut Vec<EnvVar>) {
    match node {
        YamlNode::Mapping(entries) => {
            for (key, value) in entries {
                let key = build_key(parent, key, prefix);
                flatten_into(&key, value, prefix, vars);
            }
        }
        YamlNode::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                let key = format!("{}_{}", parent, index);
                flatten_into(&key, item, prefix, vars);
            }
        }
        YamlNode::Scalar(scalar) => vars.push(EnvVar {
            key: parent.to_string(),
            value: scalar.to_env_string(),
        }),
    }
}

/// Build the variable key for a mapping entry.
///
/// The key is uppercased with `-` replaced by `_`. At the top level
/// (`parent` empty) a non-empty `prefix` is prepended.
///
/// ```
/// use yaml2env::convert::build_key;
///
/// assert_eq!(build_key("", "api-key", ""), "API_KEY");
/// assert_eq!(build_key("", "host", "APP"), "APP_HOST");
/// assert_eq!(build_key("DATABASE", "port", "APP"), "DATABASE_PORT");
/// ```
pub fn build_key(parent: &str, key: &str, prefix: &str) -> String {
    let key = key.replace('-', "_").to_uppercase();

    if parent.is_empty() {
        if prefix.is_empty() {
            key
        } else {
            format!("{}_{}", prefix, key)
        }
    } else {
        format!("{}_{}", parent, key)
    }
}
