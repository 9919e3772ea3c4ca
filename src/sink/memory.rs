//! In-memory sink for tests.

use std::collections::HashMap;

use crate::convert::EnvVar;
use crate::error::Result;

use super::EnvSink;

/// Records every applied variable without touching process state.
#[derive(Debug, Default)]
pub struct MemorySink {
    calls: Vec<EnvVar>,
    vars: HashMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every variable applied so far, in order, duplicates included.
    pub fn calls(&self) -> &[EnvVar] {
        &self.calls
    }

    /// The effective value of `key` (last write wins).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn apply(&mut self, vars: &[EnvVar]) -> Result<()> {
        for var in vars {
            self.calls.push(var.clone());
            self.vars.insert(var.key.clone(), var.value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_and_last_write_wins() {
        let mut sink = MemorySink::new();
        sink.apply(&[
            EnvVar::new("A", "1"),
            EnvVar::new("B", "2"),
            EnvVar::new("A", "3"),
        ])
        .unwrap();

        assert_eq!(sink.calls().len(), 3);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get("A"), Some("3"));
        assert_eq!(sink.get("B"), Some("2"));
        assert_eq!(sink.get("C"), None);
    }

    #[test]
    fn starts_empty() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        assert!(sink.calls().is_empty());
    }
}
