//! The splash screen lifecycle.
//!
//! A cycle moves `Idle`/`TornDown` → `Showing` → `Visible` → `Hiding` →
//! `TornDown`. The state machine lives on its own task and drives a
//! [`ViewHost`] supplied by the embedding platform. Timers and host
//! callbacks re-enter the task as continuations, so all state changes and
//! host calls happen in one place, one at a time.

mod completion;
mod machine;
pub(crate) mod scheduler;
mod state;
mod view_host;

pub use completion::{AnimationCompletion, AnimationEnd, KeepOnScreen, LaunchExit};
pub(crate) use machine::SplashLifecycle;
pub use state::{LifecycleSnapshot, LifecycleState};
pub use view_host::{
    AlphaAnimation, AttachParams, Interpolator, SpinnerRequest, ViewError, ViewHandles, ViewHost,
    ViewId, ViewRequest,
};
