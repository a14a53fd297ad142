//! Typed view of hide options.

use super::option_set::OptionSet;
use super::schema;
use std::time::Duration;

/// Options for `hide()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideOptions {
    /// Delay before the fade-out starts.
    pub delay: Duration,
    /// Fade-out length.
    pub fade_out: Duration,
}

impl From<&OptionSet> for HideOptions {
    fn from(set: &OptionSet) -> Self {
        Self {
            delay: set.duration(schema::DELAY),
            fade_out: set.duration(schema::FADE_OUT_DURATION),
        }
    }
}
