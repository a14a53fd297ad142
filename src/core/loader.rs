//! Configuration loader that merges multiple sources.

use crate::error::ConfigError;
use crate::sources::{ConfigMap, ConfigSource, ConfigTree};
use config::ValueKind;
use tracing::debug;

/// Loads and merges the global configuration from multiple sources.
///
/// The loader handles precedence by sorting sources by priority and merging them
/// in order (lower priority first, higher priority sources override). Nested
/// tables are merged key by key rather than replaced wholesale.
pub struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Load and merge configuration from all sources.
    ///
    /// With no sources the result is an empty tree, so every option falls
    /// back to its default.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to load.
    pub fn load(&self) -> Result<ConfigTree, ConfigError> {
        let mut sorted_sources: Vec<_> = self.sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        let mut merged = ConfigMap::new();

        for source in sorted_sources {
            let values = source.load().map_err(|e| {
                ConfigError::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;

            debug!("Merging configuration source '{}'", source.name());
            merge_into(&mut merged, values);
        }

        Ok(ConfigTree::new(merged))
    }

    /// Get the list of source names in priority order.
    pub fn source_names(&self) -> Vec<String> {
        let mut sorted_sources: Vec<_> = self.sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());
        sorted_sources.iter().map(|s| s.name()).collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-merge `overlay` into `base`; overlay scalars replace base values.
fn merge_into(base: &mut ConfigMap, overlay: ConfigMap) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => match (&mut existing.kind, value.kind) {
                (ValueKind::Table(existing_table), ValueKind::Table(table)) => {
                    merge_into(existing_table, table);
                }
                (slot, kind) => *slot = kind,
            },
            None => {
                base.insert(key, value);
            }
        }
    }
}
