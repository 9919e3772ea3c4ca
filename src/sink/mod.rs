//! Destinations for flattened variables.
//!
//! The converter itself never touches process state. `--set` hands the
//! variables to a list of [`EnvSink`]s instead:
//!
//! - [`ProcessEnvSink`] sets them in the current process
//! - [`CiEnvFileSink`] appends them to the CI export file
//! - [`MemorySink`] records them, for tests
//!
//! # Example
//!
//! ```
//! use yaml2env::convert::EnvVar;
//! use yaml2env::sink::{apply_env_vars, EnvSink, MemorySink};
//!
//! let mut sink = MemorySink::new();
//! let vars = vec![EnvVar::new("A", "1"), EnvVar::new("A", "2")];
//! apply_env_vars(&vars, &mut [&mut sink as &mut dyn EnvSink]).unwrap();
//! assert_eq!(sink.get("A"), Some("2"));
//! ```

pub mod ci_file;
pub mod memory;
pub mod process;

pub use ci_file::CiEnvFileSink;
pub use memory::MemorySink;
pub use process::ProcessEnvSink;

use crate::convert::EnvVar;
use crate::error::Result;

/// A destination that variables can be applied to.
pub trait EnvSink {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Apply every variable, in order.
    ///
    /// When a key repeats, the later entry wins. The first failure stops
    /// the sink and is returned.
    fn apply(&mut self, vars: &[EnvVar]) -> Result<()>;
}

/// Apply variables to each sink in turn, stopping at the first error.
pub fn apply_env_vars(vars: &[EnvVar], sinks: &mut [&mut dyn EnvSink]) -> Result<()> {
    for sink in sinks.iter_mut() {
        tracing::debug!("Applying {} variables to {}", vars.len(), sink.name());
        sink.apply(vars)?;
    }
    Ok(())
}
