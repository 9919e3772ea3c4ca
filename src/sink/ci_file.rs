//! Sink that appends variables to the CI export file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::convert::EnvVar;
use crate::error::{Result, Yaml2EnvError};

use super::EnvSink;

/// Appends `KEY=VALUE` lines to the file named by `GITHUB_ENV`.
///
/// Values containing a line break are written in the multiline form
/// `KEY<<DELIMITER`, value, `DELIMITER`, so they cannot inject extra
/// assignments. Keys containing a line break are rejected. The file is opened for each [`apply`](EnvSink::apply) call with
/// append + create + write-only semantics and closed before it returns.
/// A flush failure is reported only when every write succeeded.
#[derive(Debug, Clone)]
pub struct CiEnvFileSink {
    path: PathBuf,
}

impl CiEnvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<File> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options
            .open(&self.path)
            .map_err(|e| self.error("Failed to open GITHUB_ENV file", e))
    }

    fn write_var(&self, writer: &mut impl Write, var: &EnvVar) -> Result<()> {
        if var.key.contains(['\n', '\r']) {
            return Err(Yaml2EnvError::EnvSet {
                key: var.key.clone(),
                message: "key contains a line break".to_string(),
            });
        }

        let written = if var.value.contains(['\n', '\r']) {
            let delimiter = heredoc_delimiter(&var.value);
            write!(
                writer,
                "{}<<{}\n{}\n{}\n",
                var.key, delimiter, var.value, delimiter
            )
        } else {
            writeln!(writer, "{}={}", var.key, var.value)
        };
        written.map_err(|e| self.error("Failed to write to GITHUB_ENV file", e))
    }

    fn error(&self, what: &str, source: std::io::Error) -> Yaml2EnvError {
        Yaml2EnvError::io(format!("{} {}", what, self.path.display()), source)
    }
}

impl EnvSink for CiEnvFileSink {
    fn name(&self) -> &str {
        "GITHUB_ENV file"
    }

    fn apply(&mut self, vars: &[EnvVar]) -> Result<()> {
        let mut writer = BufWriter::new(self.open()?);

        for var in vars {
            self.write_var(&mut writer, var)?;
        }

        // Dropping a BufWriter swallows errors; flush explicitly.
        writer
            .into_inner()
            .map_err(|e| self.error("Failed to close GITHUB_ENV file", e.into_error()))?;

        Ok(())
    }
}

/// A delimiter that does not appear as a line of `value`.
fn heredoc_delimiter(value: &str) -> String {
    let mut delimiter = "YAML2ENV_EOF".to_string();
    let mut n = 0;
    while value.lines().any(|line| line.trim_end_matches('\r') == delimiter) {
        n += 1;
        delimiter = format!("YAML2ENV_EOF_{}", n);
    }
    delimiter
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_file_and_writes_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_env");
        let mut sink = CiEnvFileSink::new(&path);

        sink.apply(&[EnvVar::new("A", "1"), EnvVar::new("B", "two words")])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\nB=two words\n");
    }

    #[test]
    fn appends_to_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_env");
        fs::write(&path, "EXISTING=yes\n").unwrap();

        CiEnvFileSink::new(&path)
            .apply(&[EnvVar::new("NEW", "value")])
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "EXISTING=yes\nNEW=value\n"
        );
    }

    #[test]
    fn repeated_applies_accumulate() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_env");
        let mut sink = CiEnvFileSink::new(&path);

        sink.apply(&[EnvVar::new("A", "1")]).unwrap();
        sink.apply(&[EnvVar::new("A", "2")]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\nA=2\n");
    }

    #[test]
    fn multiline_value_uses_heredoc_form() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_env");

        CiEnvFileSink::new(&path)
            .apply(&[
                EnvVar::new("CERT", "line one\nINJECTED=yes"),
                EnvVar::new("NEXT", "1"),
            ])
            .unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "CERT<<YAML2ENV_EOF\nline one\nINJECTED=yes\nYAML2ENV_EOF\nNEXT=1\n"
        );
    }

    #[test]
    fn heredoc_delimiter_avoids_value_lines() {
        assert_eq!(heredoc_delimiter("a\nb"), "YAML2ENV_EOF");
        assert_eq!(heredoc_delimiter("a\nYAML2ENV_EOF\nb"), "YAML2ENV_EOF_1");
        assert_eq!(
            heredoc_delimiter("YAML2ENV_EOF\nYAML2ENV_EOF_1"),
            "YAML2ENV_EOF_2"
        );
    }

    #[test]
    fn key_with_line_break_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_env");

        let err = CiEnvFileSink::new(&path)
            .apply(&[EnvVar::new("BAD\nKEY", "v")])
            .unwrap_err();

        assert!(matches!(err, Yaml2EnvError::EnvSet { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unopenable_path_is_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("github_env");

        let err = CiEnvFileSink::new(&path)
            .apply(&[EnvVar::new("A", "1")])
            .unwrap_err();

        assert!(matches!(err, Yaml2EnvError::Io { .. }));
        assert!(err.to_string().contains("Failed to open GITHUB_ENV file"));
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_env");
        CiEnvFileSink::new(&path)
            .apply(&[EnvVar::new("A", "1")])
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
