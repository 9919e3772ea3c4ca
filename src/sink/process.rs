//! Sink that sets variables in the current process.

use crate::convert::EnvVar;
use crate::error::{Result, Yaml2EnvError};

use super::EnvSink;

/// Sets variables with [`std::env::set_var`].
///
/// Changes are visible to this process and to children spawned afterwards,
/// never to the shell that started `yaml2env`.
#[derive(Debug, Default)]
pub struct ProcessEnvSink;

impl ProcessEnvSink {
    pub fn new() -> Self {
        Self
    }
}

impl EnvSink for ProcessEnvSink {
    fn name(&self) -> &str {
        "process environment"
    }

    fn apply(&mut self, vars: &[EnvVar]) -> Result<()> {
        for var in vars {
            validate(var)?;
            std::env::set_var(&var.key, &var.value);
        }
        Ok(())
    }
}

/// Reject pairs that `set_var` would panic on.
fn validate(var: &EnvVar) -> Result<()> {
    let problem = if var.key.is_empty() {
        Some("key is empty")
    } else if var.key.contains('=') {
        Some("key contains '='")
    } else if var.key.contains('\0') {
        Some("key contains a NUL byte")
    } else if var.value.contains('\0') {
        Some("value contains a NUL byte")
    } else {
        None
    };

    match problem {
        Some(message) => Err(Yaml2EnvError::EnvSet {
            key: var.key.clone(),
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}
