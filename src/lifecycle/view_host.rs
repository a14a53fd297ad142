//! The view host: the platform side that renders the splash.

use super::{AnimationCompletion, KeepOnScreen, LaunchExit};
use crate::options::{Argb, ImageDisplayMode, ShowOptions, SpinnerStyle};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Opaque identifier of a view owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// The views that make up one splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ViewHandles {
    /// The full-screen splash container.
    pub splash: ViewId,
    /// The icon or image inside the splash, if separate.
    pub icon: Option<ViewId>,
    /// The spinner overlay, if one was requested.
    pub spinner: Option<ViewId>,
}

impl ViewHandles {
    /// Handles for a lone splash view.
    pub fn new(splash: ViewId) -> Self {
        Self {
            splash,
            icon: None,
            spinner: None,
        }
    }

    /// Set the icon view.
    pub fn with_icon(mut self, icon: ViewId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the spinner view.
    pub fn with_spinner(mut self, spinner: ViewId) -> Self {
        self.spinner = Some(spinner);
        self
    }
}

/// A requested spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerRequest {
    /// Appearance.
    pub style: SpinnerStyle,
    /// Tint.
    pub color: Option<Argb>,
}

/// What to build for a show cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    /// Resource name, `*` for the launch screen's.
    pub source: String,
    /// Background color.
    pub background: Option<Argb>,
    /// Image scaling.
    pub display_mode: ImageDisplayMode,
    /// Spinner, if requested.
    pub spinner: Option<SpinnerRequest>,
    /// The cycle is the launch splash.
    pub is_launch_splash: bool,
}

impl ViewRequest {
    /// The request for a cycle shown with `options`.
    pub fn new(options: &ShowOptions, is_launch_splash: bool) -> Self {
        Self {
            source: options.source.clone(),
            background: options.background,
            display_mode: options.display_mode,
            spinner: options.show_spinner.then_some(SpinnerRequest {
                style: options.spinner_style,
                color: options.spinner_color,
            }),
            is_launch_splash,
        }
    }
}

/// How a view is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachParams {
    /// Cover the status bar.
    pub fullscreen: bool,
    /// Initial alpha.
    pub alpha: f32,
}

/// Animation timing curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolator {
    /// Constant speed.
    #[default]
    Linear,
}

/// An alpha animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaAnimation {
    /// Start alpha.
    pub from: f32,
    /// End alpha.
    pub to: f32,
    /// Length.
    pub duration: Duration,
    /// Delay before starting.
    pub delay: Duration,
    /// Timing curve.
    pub interpolator: Interpolator,
}

/// Failures reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The named resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The view could not be built or attached.
    #[error("View construction failed: {0}")]
    Build(String),
}

/// Rendering primitives the lifecycle drives.
///
/// All calls are made from the lifecycle task, one at a time. Completions
/// may be finished from anywhere, at any later time.
pub trait ViewHost: Send + 'static {
    /// Build, but do not attach, the views for a splash.
    fn build_view(&mut self, request: &ViewRequest) -> Result<ViewHandles, ViewError>;

    /// Attach a built view to the window.
    fn attach_view(&mut self, view: ViewId, params: &AttachParams) -> Result<(), ViewError>;

    /// Detach and release a view. Called once per attached view.
    fn detach_view(&mut self, view: ViewId);

    /// Animate a view's alpha, finishing `on_complete` when the animation ends
    /// or is cancelled.
    fn animate_alpha(
        &mut self,
        view: ViewId,
        animation: AlphaAnimation,
        on_complete: AnimationCompletion,
    );

    /// Keep the platform launch screen up while `predicate` holds, and call
    /// `exit` when it starts to exit.
    fn keep_on_screen(&mut self, predicate: KeepOnScreen, exit: LaunchExit);
}
