//! Key path resolution over configuration trees.

mod key_path;
mod resolver;
mod value;

pub use key_path::KeyPath;
pub use resolver::{DEFAULT_PLATFORM_PREFIX, KeyPathResolver};
pub use value::{ResolvedValue, ValueType};
