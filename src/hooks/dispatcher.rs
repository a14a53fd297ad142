//! Invocation of the host-supplied hook.

use super::HookParams;
use crate::error::SplashError;
use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::{debug, warn};

/// Why a hook did not handle an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookFailure {
    /// The hook does not handle this event.
    NotHandled,
    /// The hook failed.
    Failed(String),
}

/// The host hook.
///
/// Registered once at initialization. Hooks run on the lifecycle task and
/// must not block; long-running work should be spawned, holding on to the
/// [`HookCompletion`](super::HookCompletion) for animation events.
pub type HookFn = Arc<dyn Fn(HookParams) -> Result<(), HookFailure> + Send + Sync>;

/// What happened when an event was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The hook ran.
    Invoked,
    /// Nothing ran; the event needs no response.
    Skipped,
    /// No hook ran and the animation was completed on its behalf.
    Completed,
}

/// Dispatches lifecycle events to the optional host hook.
///
/// Without a hook, notification events are skipped and animation events
/// complete immediately so `animate()` still takes the splash down. A hook
/// that declines an animation event or fails yields an error for the
/// caller; a hook that declines a notification event is treated as skipped.
/// Panics inside the hook are caught and reported as failures.
#[derive(Clone, Default)]
pub struct HookDispatcher {
    hook: Option<HookFn>,
}

impl HookDispatcher {
    /// Create a dispatcher for an optional hook.
    pub fn new(hook: Option<HookFn>) -> Self {
        Self { hook }
    }

    /// Create a dispatcher from a closure.
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn(HookParams) -> Result<(), HookFailure> + Send + Sync + 'static,
    {
        Self::new(Some(Arc::new(hook)))
    }

    /// Whether a hook is registered.
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Dispatch `params.event` to the hook.
    pub fn invoke(&self, mut params: HookParams) -> Result<DispatchOutcome, SplashError> {
        let event = params.event;

        let Some(hook) = &self.hook else {
            if event.is_animation() {
                debug!(%event, "No hook registered, completing animation");
                if let Some(completion) = params.completion.take() {
                    completion.done();
                }
                return Ok(DispatchOutcome::Completed);
            }
            return Ok(DispatchOutcome::Skipped);
        };

        debug!(%event, "Invoking hook");
        match catch_unwind(AssertUnwindSafe(|| hook(params))) {
            Ok(Ok(())) => Ok(DispatchOutcome::Invoked),
            Ok(Err(HookFailure::NotHandled)) if !event.is_animation() => {
                debug!(%event, "Hook declined event");
                Ok(DispatchOutcome::Skipped)
            }
            Ok(Err(HookFailure::NotHandled)) => {
                warn!(%event, "Hook does not handle animation event");
                Err(SplashError::HookNotFound(event))
            }
            Ok(Err(HookFailure::Failed(message))) => {
                warn!(%event, %message, "Hook failed");
                Err(SplashError::HookFailed(message))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(%event, %message, "Hook panicked");
                Err(SplashError::HookFailed(message))
            }
        }
    }
}

impl fmt::Debug for HookDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookDispatcher")
            .field("has_hook", &self.has_hook())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "hook panicked".to_string())
}
