//! Shell-specific rendering of environment variables.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, Yaml2EnvError};

use super::flatten::EnvVar;

/// Supported output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// POSIX shells (`bash`, `sh`): `export KEY='VALUE'`.
    Posix,
    /// PowerShell (`powershell`, `ps1`): `$env:KEY = 'VALUE'`.
    PowerShell,
    /// Windows `cmd`: `set KEY=VALUE`, unquoted.
    Cmd,
}

impl ShellType {
    /// Render a single assignment, including the trailing newline.
    pub fn render(&self, var: &EnvVar) -> String {
        match self {
            ShellType::Posix => {
                format!("export {}='{}'\n", var.key, escape_single_quote(&var.value))
            }
            ShellType::PowerShell => {
                format!("$env:{} = '{}'\n", var.key, escape_single_quote(&var.value))
            }
            ShellType::Cmd => format!("set {}={}\n", var.key, var.value),
        }
    }
}

impl FromStr for ShellType {
    type Err = Yaml2EnvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Posix),
            "powershell" | "ps1" => Ok(Self::PowerShell),
            "cmd" => Ok(Self::Cmd),
            _ => Err(Yaml2EnvError::UnsupportedShell {
                shell: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShellType::Posix => "sh",
            ShellType::PowerShell => "powershell",
            ShellType::Cmd => "cmd",
        };
        f.write_str(name)
    }
}

/// Format variables as assignments for the named shell.
///
/// The shell name is matched case-insensitively against `bash`, `sh`,
/// `powershell`, `ps1` and `cmd`.
///
/// # Example
///
/// ```
/// use yaml2env::convert::{format_for_shell, EnvVar};
///
/// let vars = vec![EnvVar::new("GREETING", "it's here")];
/// let out = format_for_shell(&vars, "bash").unwrap();
/// assert_eq!(out, "export GREETING='it'\\''s here'\n");
/// ```
pub fn format_for_shell(vars: &[EnvVar], shell: &str) -> Result<String> {
    let shell: ShellType = shell.parse()?;
    tracing::debug!("Formatting {} variables for {}", vars.len(), shell);
    Ok(vars.iter().map(|var| shell.render(var)).collect())
}

/// Escape single quotes for embedding inside a single-quoted string.
///
/// Each `'` closes the quote, emits an escaped quote, and reopens: `'\''`.
pub fn escape_single_quote(value: &str) -> String {
    value.replace('\'', "'\\''")
}
