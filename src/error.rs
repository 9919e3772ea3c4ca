//! Error types for yaml2env operations.
//!
//! This module defines [`Yaml2EnvError`], the error type returned by every
//! stage of a conversion, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each variant maps to one stage: reading input, parsing YAML,
//!   choosing a shell dialect, writing output, or setting variables
//! - Use `anyhow::Error` (via `Yaml2EnvError::Other`) for unexpected errors
//! - Every error is terminal for the invocation; nothing is retried

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for yaml2env operations.
#[derive(Debug, Error)]
pub enum Yaml2EnvError {
    /// The input document could not be read.
    #[error("Cannot read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a YAML mapping document.
    #[error("Invalid YAML: {message}")]
    Parse { message: String },

    /// The requested shell dialect is not supported.
    #[error("Unsupported shell type: {shell}")]
    UnsupportedShell { shell: String },

    /// Writing formatted output or the CI export file failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A variable could not be applied to the process environment.
    #[error("Failed to set {key}: {message}")]
    EnvSet { key: String, message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Yaml2EnvError {
    /// Wrap an I/O error with a description of what was being written.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// The pipeline stage that failed, for user-facing messages.
    ///
    /// `Io` errors already name what was being written.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            Self::Input { .. } => Some("failed to read file"),
            Self::Parse { .. } => Some("failed to convert YAML"),
            Self::UnsupportedShell { .. } => Some("failed to format for shell"),
            Self::EnvSet { .. } => Some("failed to set environment variables"),
            Self::Io { .. } | Self::Other(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for Yaml2EnvError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

/// Result type alias for yaml2env operations.
pub type Result<T> = std::result::Result<T, Yaml2EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_displays_path() {
        let err = Yaml2EnvError::Input {
            path: PathBuf::from("/foo/bar.yml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/foo/bar.yml"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn parse_error_displays_message() {
        let err = Yaml2EnvError::Parse {
            message: "mapping values are not allowed".into(),
        };
        assert!(err.to_string().contains("mapping values are not allowed"));
    }

    #[test]
    fn unsupported_shell_displays_name() {
        let err = Yaml2EnvError::UnsupportedShell {
            shell: "fish".into(),
        };
        assert_eq!(err.to_string(), "Unsupported shell type: fish");
    }

    #[test]
    fn io_error_displays_context() {
        let err = Yaml2EnvError::io(
            "Failed to write to GITHUB_ENV",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("GITHUB_ENV"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn env_set_displays_key_and_message() {
        let err = Yaml2EnvError::EnvSet {
            key: "BAD=KEY".into(),
            message: "key contains '='".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("BAD=KEY"));
        assert!(msg.contains("'='"));
    }

    #[test]
    fn yaml_error_converts_to_parse() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: b: c").unwrap_err();
        let err: Yaml2EnvError = yaml_err.into();
        assert!(matches!(err, Yaml2EnvError::Parse { .. }));
    }

    #[test]
    fn stage_names_failing_step() {
        let err = Yaml2EnvError::UnsupportedShell {
            shell: "fish".into(),
        };
        assert_eq!(err.stage(), Some("failed to format for shell"));

        let err = Yaml2EnvError::Parse {
            message: "bad".into(),
        };
        assert_eq!(err.stage(), Some("failed to convert YAML"));

        let err = Yaml2EnvError::io(
            "Failed to write output",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        );
        assert_eq!(err.stage(), None);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(Yaml2EnvError::UnsupportedShell { shell: "zsh".into() })
        }
        assert!(returns_error().is_err());
    }
}
