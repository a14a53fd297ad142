//! Callbacks handed to the view host.
//!
//! Each one posts back onto the lifecycle task. Dropping one without
//! completing it counts as cancellation, so the lifecycle always sees the
//! end of every animation it started.

use super::LifecycleSnapshot;
use super::scheduler::{Command, Continuation, Fade, Scheduler};
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;

/// How an animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// It ran to completion.
    Finished,
    /// It was cancelled, e.g. because its view was detached.
    Cancelled,
}

struct FadeTarget {
    scheduler: Scheduler,
    cycle: u64,
    fade: Fade,
}

/// Completion callback for [`ViewHost::animate_alpha`](super::ViewHost::animate_alpha).
pub struct AnimationCompletion {
    target: Option<FadeTarget>,
}

impl AnimationCompletion {
    pub(crate) fn fade(scheduler: Scheduler, cycle: u64, fade: Fade) -> Self {
        Self {
            target: Some(FadeTarget {
                scheduler,
                cycle,
                fade,
            }),
        }
    }

    /// A completion nobody waits for.
    pub fn ignored() -> Self {
        Self { target: None }
    }

    /// The animation ran to completion.
    pub fn finished(mut self) {
        self.complete(AnimationEnd::Finished);
    }

    /// The animation was cancelled.
    pub fn cancelled(mut self) {
        self.complete(AnimationEnd::Cancelled);
    }

    fn complete(&mut self, end: AnimationEnd) {
        if let Some(FadeTarget {
            scheduler,
            cycle,
            fade,
        }) = self.target.take()
        {
            scheduler.post(Command::Continue(Continuation::FadeEnded { cycle, fade, end }));
        }
    }
}

impl Drop for AnimationCompletion {
    fn drop(&mut self) {
        self.complete(AnimationEnd::Cancelled);
    }
}

impl fmt::Debug for AnimationCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationCompletion")
            .field("cycle", &self.target.as_ref().map(|t| t.cycle))
            .finish()
    }
}

/// Whether the platform launch screen should stay up.
///
/// True while the minimum show time since process launch has not elapsed,
/// or while nobody has asked the launch splash to go away. False once the
/// launch cycle has ended. Cheap to evaluate and safe to call from any thread.
#[derive(Clone)]
pub struct KeepOnScreen {
    snapshot: Arc<ArcSwap<LifecycleSnapshot>>,
    cycle: u64,
    show_until: Instant,
}

impl KeepOnScreen {
    pub(crate) fn new(
        snapshot: Arc<ArcSwap<LifecycleSnapshot>>,
        cycle: u64,
        show_until: Instant,
    ) -> Self {
        Self {
            snapshot,
            cycle,
            show_until,
        }
    }

    /// Evaluate the predicate now.
    pub fn should_keep(&self) -> bool {
        let snapshot = self.snapshot.load();
        if snapshot.cycle != self.cycle || !snapshot.state.is_active() {
            return false;
        }

        Instant::now() < self.show_until || !snapshot.is_hiding
    }

    /// The end of the minimum show time.
    pub fn show_until(&self) -> Instant {
        self.show_until
    }
}

impl fmt::Debug for KeepOnScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeepOnScreen")
            .field("cycle", &self.cycle)
            .field("show_until", &self.show_until)
            .finish()
    }
}

/// Signals that the platform launch screen started its exit.
///
/// Dropping it counts as an exit.
pub struct LaunchExit {
    target: Option<(Scheduler, u64)>,
}

impl LaunchExit {
    pub(crate) fn new(scheduler: Scheduler, cycle: u64) -> Self {
        Self {
            target: Some((scheduler, cycle)),
        }
    }

    /// The launch screen is exiting.
    pub fn exit(mut self) {
        self.signal();
    }

    fn signal(&mut self) {
        if let Some((scheduler, cycle)) = self.target.take() {
            scheduler.post(Command::Continue(Continuation::LaunchExited { cycle }));
        }
    }
}

impl Drop for LaunchExit {
    fn drop(&mut self) {
        self.signal();
    }
}

impl fmt::Debug for LaunchExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchExit")
            .field("pending", &self.target.is_some())
            .finish()
    }
}
