//! Typed view of animate options.

use super::option_set::OptionSet;
use super::schema;
use std::time::Duration;

/// Options for `animate()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimateOptions {
    /// Delay before the animate hook runs.
    pub delay: Duration,
    /// Suggested animation length, passed to the hook.
    pub duration: Duration,
}

impl From<&OptionSet> for AnimateOptions {
    fn from(set: &OptionSet) -> Self {
        Self {
            delay: set.duration(schema::DELAY),
            duration: set.duration(schema::ANIMATION_DURATION),
        }
    }
}
