//! The cloneable handle to a running splash screen lifecycle.

use crate::core::SplashScreenBuilder;
use crate::error::{Outcome, SplashError};
use crate::lifecycle::scheduler::{Command, Reply};
use crate::lifecycle::{LifecycleSnapshot, LifecycleState};
use crate::sources::ConfigTree;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

/// Handle to the splash screen lifecycle.
///
/// Requests are forwarded to the lifecycle task and answered when the
/// operation completes: `show` once the fade-in ends, `hide` and `animate`
/// once the splash is torn down. Cloning is cheap; the lifecycle stops when
/// the last handle is dropped.
///
/// # Examples
///
/// ```rust,no_run
/// use splash_lifecycle::prelude::*;
/// use serde_json::json;
///
/// # async fn example(host: impl ViewHost) -> Result<(), Box<dyn std::error::Error>> {
/// let splash = SplashScreen::builder()
///     .with_plugin_config(json!({ "showDuration": 2, "fadeOutDuration": 400 }))
///     .with_view_host(host)
///     .build()
///     .await?;
///
/// splash.show(json!({ "delay": 0.5, "autoHide": false })).await?;
/// splash.hide(json!({})).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SplashScreen {
    commands: mpsc::UnboundedSender<Command>,
    snapshot: Arc<ArcSwap<LifecycleSnapshot>>,
    global: Arc<ConfigTree>,
}

impl SplashScreen {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        snapshot: Arc<ArcSwap<LifecycleSnapshot>>,
        global: Arc<ConfigTree>,
    ) -> Self {
        Self {
            commands,
            snapshot,
            global,
        }
    }

    /// Create a builder.
    pub fn builder() -> SplashScreenBuilder {
        SplashScreenBuilder::new()
    }

    /// Show the launch splash, configured from the global config only.
    ///
    /// Resolves immediately when `showDuration` is zero.
    pub async fn show_on_launch(&self) -> Outcome {
        self.request(|reply| Command::ShowOnLaunch { reply }).await
    }

    /// Start the launch splash without waiting for it.
    pub(crate) fn start_launch(&self) {
        let (reply, _) = oneshot::channel();
        let _ = self.commands.send(Command::ShowOnLaunch { reply });
    }

    /// Show a splash.
    ///
    /// Resolves once the fade-in has finished. If the cycle is torn down
    /// first, for example by a `hide()` that arrives during the delay, it
    /// resolves `Ok(())` even though the view was never attached.
    ///
    /// # Errors
    ///
    /// - [`SplashError::AlreadyActive`] if a splash is showing.
    /// - [`SplashError::NotFound`] if the source does not exist.
    /// - [`SplashError::NoSplash`] if the view could not be built.
    pub async fn show(&self, options: impl Into<ConfigTree>) -> Outcome {
        let options = options.into();
        self.request(|reply| Command::Show { options, reply }).await
    }

    /// Fade out and tear down the splash.
    ///
    /// # Errors
    ///
    /// - [`SplashError::AlreadyHiding`] if a hide or animate is in progress.
    /// - [`SplashError::NoSplash`] if nothing is showing.
    pub async fn hide(&self, options: impl Into<ConfigTree>) -> Outcome {
        let options = options.into();
        self.request(|reply| Command::Hide { options, reply }).await
    }

    /// Hand the exit animation to the host hook.
    ///
    /// # Errors
    ///
    /// As for [`hide`](Self::hide), plus the hook's own failures. A failed
    /// hook still tears the splash down.
    pub async fn animate(&self, options: impl Into<ConfigTree>) -> Outcome {
        let options = options.into();
        self.request(|reply| Command::Animate { options, reply }).await
    }

    /// Tear down the current splash immediately. Does nothing if none is showing.
    pub async fn tear_down(&self) {
        let (reply, done) = oneshot::channel();
        if self.commands.send(Command::TearDown { reply }).is_ok() {
            let _ = done.await;
        }
    }

    /// The latest published lifecycle state.
    pub fn snapshot(&self) -> Arc<LifecycleSnapshot> {
        self.snapshot.load_full()
    }

    /// The current state.
    pub fn state(&self) -> LifecycleState {
        self.snapshot.load().state
    }

    /// The plugin section of the global configuration.
    pub fn global_config(&self) -> &ConfigTree {
        &self.global
    }

    async fn request(&self, command: impl FnOnce(Reply) -> Command) -> Outcome {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(command(reply))
            .map_err(|_| SplashError::Closed)?;

        let outcome = outcome.await.map_err(|_| SplashError::Closed)?;
        trace!(?outcome, "Request answered");
        outcome
    }
}

impl std::fmt::Debug for SplashScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplashScreen")
            .field("state", &self.state())
            .finish()
    }
}
