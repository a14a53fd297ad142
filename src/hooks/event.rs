//! Hook event kinds.

use std::fmt;

/// Lifecycle points at which the host hook is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// The splash view was attached and is about to fade in.
    BeforeShow,
    /// The splash view was torn down.
    AfterShow,
    /// `animate()` on an explicitly shown splash. The hook owns the exit
    /// animation and must complete the attached [`HookCompletion`](super::HookCompletion).
    Animate,
    /// `animate()` on the launch splash, run once the platform launch screen exits.
    AnimateLaunch,
}

impl HookEvent {
    /// The event name as seen by host code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeShow => "beforeShow",
            Self::AfterShow => "afterShow",
            Self::Animate => "animate",
            Self::AnimateLaunch => "animateLaunch",
        }
    }

    /// Whether the event drives an animation that must be completed explicitly.
    pub fn is_animation(self) -> bool {
        matches!(self, Self::Animate | Self::AnimateLaunch)
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
