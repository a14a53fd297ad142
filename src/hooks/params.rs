//! The parameter bag passed to the host hook.

use super::HookEvent;
use crate::error::{Outcome, SplashError};
use crate::lifecycle::{LifecycleSnapshot, ViewHandles};
use crate::sources::ConfigTree;
use std::fmt;
use std::time::Duration;

type Notify = Box<dyn FnOnce(Outcome) + Send>;

/// Signals the end of a hook-driven animation.
///
/// Must be completed exactly once, with [`done`](Self::done) or
/// [`fail`](Self::fail). Dropping it without completing reports a failure,
/// so the splash is never left on screen by a forgotten completion.
pub struct HookCompletion {
    notify: Option<Notify>,
}

impl HookCompletion {
    /// Wrap a callback that receives the outcome.
    pub fn new<F>(notify: F) -> Self
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        Self {
            notify: Some(Box::new(notify)),
        }
    }

    /// The animation finished.
    pub fn done(mut self) {
        self.complete(Ok(()));
    }

    /// The animation failed.
    pub fn fail(mut self, message: impl Into<String>) {
        self.complete(Err(SplashError::HookFailed(message.into())));
    }

    fn complete(&mut self, outcome: Outcome) {
        if let Some(notify) = self.notify.take() {
            notify(outcome);
        }
    }
}

impl Drop for HookCompletion {
    fn drop(&mut self) {
        self.complete(Err(SplashError::HookFailed(
            "animation completion was dropped without being called".to_string(),
        )));
    }
}

impl fmt::Debug for HookCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookCompletion")
            .field("pending", &self.notify.is_some())
            .finish()
    }
}

/// Everything the host hook is told about an event.
#[derive(Debug)]
pub struct HookParams {
    /// The event being dispatched.
    pub event: HookEvent,
    /// The resolved splash source.
    pub source: String,
    /// The splash, icon and spinner views.
    pub views: ViewHandles,
    /// The operation's raw call options, without `delay`.
    pub options: ConfigTree,
    /// Suggested animation length, for animation events.
    pub duration: Option<Duration>,
    /// Lifecycle state at dispatch time.
    pub snapshot: LifecycleSnapshot,
    /// Present for animation events only.
    pub completion: Option<HookCompletion>,
}
