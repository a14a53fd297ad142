//! # splash-lifecycle
//!
//! Splash screen lifecycle core: option resolution and a show/hide/animate
//! state machine driving a platform view host.
//!
//! ## Overview
//!
//! `splash-lifecycle` provides the platform-independent part of a native
//! splash screen plugin:
//! - Key path resolution over layered configuration, with platform-specific
//!   overrides in either a nested (`android: { showDuration }`) or flat
//!   (`androidShowDuration`) shape
//! - Typed per-operation option sets with seconds-or-milliseconds durations
//! - A single-task lifecycle with single-flight show/hide/animate, launch
//!   splash timing measured from process start, and guaranteed teardown
//! - An optional host hook for custom show/exit animations
//!
//! Rendering is delegated to a [`ViewHost`](lifecycle::ViewHost) supplied by
//! the embedding platform.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splash_lifecycle::prelude::*;
//! use serde_json::json;
//!
//! # async fn example(host: impl ViewHost) -> Result<(), Box<dyn std::error::Error>> {
//! let splash = SplashScreen::builder()
//!     .with_file("capacitor.config.json")
//!     .with_view_host(host)
//!     .show_on_launch(false)
//!     .build()
//!     .await?;
//!
//! // Fade in after two seconds, hide automatically after showDuration.
//! splash.show(json!({ "delay": 2, "autoHide": true })).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `yaml`: YAML config files
//! - `toml`: TOML config files
//!
//! JSON config files are always supported.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod hooks;
pub mod lifecycle;
pub mod options;
pub mod resolve;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{SplashScreen, SplashScreenBuilder};
    pub use crate::error::{ConfigError, ErrorCode, Outcome, SplashError};
    pub use crate::hooks::{HookCompletion, HookEvent, HookFailure, HookParams};
    pub use crate::lifecycle::{
        AlphaAnimation, AnimationCompletion, AttachParams, KeepOnScreen, LaunchExit,
        LifecycleSnapshot, LifecycleState, ViewError, ViewHandles, ViewHost, ViewId, ViewRequest,
    };
    pub use crate::sources::ConfigTree;
}
