//! Configuration source trait.

use crate::error::ConfigError;
use crate::sources::ConfigMap;

/// Trait for global configuration sources.
///
/// Implement this trait to feed the global configuration from somewhere other
/// than a file (an embedded asset, a host-provided JSON blob, ...).
pub trait ConfigSource: Send + Sync {
    /// Load the whole application configuration as a tree of values.
    ///
    /// The returned map is deep-merged with other sources according to
    /// precedence rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<ConfigMap, ConfigError>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// Get the priority of this source (higher = takes precedence).
    ///
    /// Default priorities:
    /// - Plugin config supplied programmatically: 200
    /// - Files: 100, 110, 120, ... in the order they were added
    fn priority(&self) -> i32 {
        100
    }
}
