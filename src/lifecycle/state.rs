//! Lifecycle states and the published snapshot.

use super::ViewHandles;
use serde::Serialize;
use std::fmt;

/// Where the current show cycle is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleState {
    /// Nothing has been shown yet.
    #[default]
    Idle,
    /// A view exists and is waiting for, or running, its fade-in.
    Showing,
    /// Fade-in finished.
    Visible,
    /// A hide or animate is in progress.
    Hiding,
    /// The last cycle was torn down. A new `show()` starts a fresh cycle.
    TornDown,
}

impl LifecycleState {
    /// Name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Showing => "showing",
            Self::Visible => "visible",
            Self::Hiding => "hiding",
            Self::TornDown => "tornDown",
        }
    }

    /// Whether a cycle is in progress.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Showing | Self::Visible | Self::Hiding)
    }

    /// Whether `show()` is allowed.
    pub fn can_show(self) -> bool {
        matches!(self, Self::Idle | Self::TornDown)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only copy of the lifecycle state, published after every change.
///
/// Serializes in camelCase for handing back to host code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleSnapshot {
    /// Current state.
    pub state: LifecycleState,
    /// Id of the current or last cycle, 0 before the first one.
    pub cycle: u64,
    /// The cycle is the launch splash.
    pub is_launch_splash: bool,
    /// A hide or animate was requested for the cycle.
    pub is_hiding: bool,
    /// `animate()` was requested for the cycle.
    pub animate_requested: bool,
    /// The cycle's resolved source.
    pub source: Option<String>,
    /// The cycle's views, until teardown.
    pub views: Option<ViewHandles>,
}
