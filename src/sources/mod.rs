//! Configuration sources and the trees they produce.

mod config_source;
mod file;
mod memory;
mod tree;

pub use config_source::ConfigSource;
pub use file::FileSource;
pub use memory::MemorySource;
pub use tree::ConfigTree;

/// A table of configuration values keyed by name.
pub type ConfigMap = config::Map<String, config::Value>;
