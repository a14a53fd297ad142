//! In-memory configuration source.

use super::ConfigSource;
use crate::error::ConfigError;
use crate::sources::{ConfigMap, ConfigTree};

/// A configuration source backed by a tree that is already in memory.
///
/// Useful when the host embeds its configuration, and in tests.
///
/// # Examples
///
/// ```rust
/// use splash_lifecycle::sources::MemorySource;
/// use serde_json::json;
///
/// let source = MemorySource::from_json("embedded", json!({
///     "plugins": { "SplashScreen": { "showDuration": 0 } }
/// }));
/// ```
pub struct MemorySource {
    name: String,
    tree: ConfigTree,
    priority: i32,
}

impl MemorySource {
    /// Create a source from an existing tree.
    pub fn new(name: impl Into<String>, tree: ConfigTree) -> Self {
        Self {
            name: name.into(),
            tree,
            priority: 100,
        }
    }

    /// Create a source from a JSON object.
    pub fn from_json(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self::new(name, ConfigTree::from_json(value))
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl ConfigSource for MemorySource {
    fn load(&self) -> Result<ConfigMap, ConfigError> {
        Ok(self.tree.root().clone())
    }

    fn name(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
