//! Detection of the CI context from environment variables.

use std::path::PathBuf;

/// Variable that marks a CI run.
pub const CI_VAR: &str = "CI";

/// Variable that names the CI export file (GitHub Actions).
pub const CI_ENV_FILE_VAR: &str = "GITHUB_ENV";

/// What the CI system told us about the current run.
///
/// # Example
///
/// ```
/// use yaml2env::environment::CiContext;
///
/// let ctx = CiContext::detect_with_env(|key| match key {
///     "GITHUB_ENV" => Ok("/tmp/github_env".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert!(ctx.is_recognized());
/// assert!(ctx.env_file.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiContext {
    /// `CI` is set to a non-empty value.
    pub ci: bool,
    /// Trusted path to append `KEY=VALUE` lines to, if the CI system provides one.
    pub env_file: Option<PathBuf>,
}

impl CiContext {
    /// Detect the context from the process environment.
    pub fn detect() -> Self {
        Self::detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    ///
    /// Variables that are present but empty count as unset.
    pub fn detect_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let non_empty = |key: &str| env_fn(key).ok().filter(|v| !v.is_empty());

        Self {
            ci: non_empty(CI_VAR).is_some(),
            env_file: non_empty(CI_ENV_FILE_VAR).map(PathBuf::from),
        }
    }

    /// Whether either CI signal is present.
    pub fn is_recognized(&self) -> bool {
        self.ci || self.env_file.is_some()
    }
}
