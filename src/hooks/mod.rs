//! Host hook dispatch.
//!
//! The embedding application may register one [`HookFn`] at initialization.
//! It is called at fixed lifecycle points with a [`HookParams`] bag; for
//! the animation events it takes over the exit animation and signals the
//! end through a [`HookCompletion`].

mod dispatcher;
mod event;
mod params;

pub use dispatcher::{DispatchOutcome, HookDispatcher, HookFailure, HookFn};
pub use event::HookEvent;
pub use params::{HookCompletion, HookParams};
