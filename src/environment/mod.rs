//! CI environment detection.
//!
//! `yaml2env --set` behaves differently inside CI: it also appends the
//! variables to the CI export file so later pipeline steps see them, and it
//! skips the advisory warnings meant for interactive shells.

pub mod detection;

pub use detection::{CiContext, CI_ENV_FILE_VAR, CI_VAR};
