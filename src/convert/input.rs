//! Reading the input document.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, Yaml2EnvError};

/// Path argument that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read the YAML document at `path`, or from stdin when `path` is `-`.
pub fn load_document(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        tracing::debug!("Reading document from stdin");
        return read_from(std::io::stdin().lock(), path);
    }

    tracing::debug!("Reading document from {}", path.display());
    fs::read_to_string(path).map_err(|source| Yaml2EnvError::Input {
        path: path.to_path_buf(),
        source,
    })
}

fn read_from(mut reader: impl Read, path: &Path) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| Yaml2EnvError::Input {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content)
}
