//! Shared test helpers: a view host that records every call.

#![allow(dead_code)]

use parking_lot::Mutex;
use splash_lifecycle::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Something the host was asked to do, with the time since the host was created.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Built { source: String, spinner: bool },
    Attached { view: ViewId, at: Duration },
    Detached { view: ViewId, at: Duration },
    Animated { view: ViewId, from: f32, to: f32, duration: Duration, at: Duration },
    KeepOnScreen { at: Duration },
}

#[derive(Default)]
struct HostState {
    events: Vec<HostEvent>,
    next_id: u64,
    missing: Option<String>,
    broken: bool,
    hold_animations: bool,
    held: Vec<AnimationCompletion>,
    keep: Option<KeepOnScreen>,
    exit: Option<LaunchExit>,
}

/// A [`ViewHost`] that records calls and finishes animations after their duration.
#[derive(Clone)]
pub struct RecordingHost {
    state: Arc<Mutex<HostState>>,
    origin: Instant,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(HostState::default())),
            origin: Instant::now(),
        }
    }

    /// Report `source` as missing until [`fix`](Self::fix) is called.
    pub fn missing(self, source: &str) -> Self {
        self.state.lock().missing = Some(source.to_string());
        self
    }

    /// Fail every view construction.
    pub fn broken(self) -> Self {
        self.state.lock().broken = true;
        self
    }

    /// Keep animation completions until the test releases them.
    pub fn holding_animations(self) -> Self {
        self.state.lock().hold_animations = true;
        self
    }

    pub fn fix(&self) {
        let mut state = self.state.lock();
        state.missing = None;
        state.broken = false;
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.state.lock().events.clone()
    }

    pub fn built(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, HostEvent::Built { .. }))
            .count()
    }

    pub fn attached(&self) -> Vec<(ViewId, Duration)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Attached { view, at } => Some((view, at)),
                _ => None,
            })
            .collect()
    }

    pub fn detached(&self) -> Vec<(ViewId, Duration)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Detached { view, at } => Some((view, at)),
                _ => None,
            })
            .collect()
    }

    /// Alpha animations as `(from, to, duration, at)`.
    pub fn animations(&self) -> Vec<(f32, f32, Duration, Duration)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Animated {
                    from,
                    to,
                    duration,
                    at,
                    ..
                } => Some((from, to, duration, at)),
                _ => None,
            })
            .collect()
    }

    /// Cancel every held animation.
    pub fn cancel_animations(&self) {
        let held = std::mem::take(&mut self.state.lock().held);
        for completion in held {
            completion.cancelled();
        }
    }

    /// Drop every held animation without completing it.
    pub fn drop_animations(&self) {
        let held = std::mem::take(&mut self.state.lock().held);
        drop(held);
    }

    pub fn held_animations(&self) -> usize {
        self.state.lock().held.len()
    }

    /// Evaluate the registered keep-on-screen predicate.
    pub fn keep_on_screen(&self) -> Option<bool> {
        self.state.lock().keep.as_ref().map(KeepOnScreen::should_keep)
    }

    /// Let the platform launch screen exit.
    pub fn release_launch(&self) {
        let exit = self.state.lock().exit.take();
        if let Some(exit) = exit {
            exit.exit();
        }
    }

    fn record(&self, event: HostEvent) {
        self.state.lock().events.push(event);
    }
}

impl ViewHost for RecordingHost {
    fn build_view(&mut self, request: &ViewRequest) -> Result<ViewHandles, ViewError> {
        let mut state = self.state.lock();
        if state.broken {
            return Err(ViewError::Build("inflation failed".into()));
        }
        if state.missing.as_deref() == Some(request.source.as_str()) {
            return Err(ViewError::NotFound(request.source.clone()));
        }

        state.events.push(HostEvent::Built {
            source: request.source.clone(),
            spinner: request.spinner.is_some(),
        });

        state.next_id += 1;
        let mut handles = ViewHandles::new(ViewId(state.next_id));
        if request.spinner.is_some() {
            state.next_id += 1;
            handles = handles.with_spinner(ViewId(state.next_id));
        }
        Ok(handles)
    }

    fn attach_view(&mut self, view: ViewId, _params: &AttachParams) -> Result<(), ViewError> {
        let at = self.origin.elapsed();
        self.record(HostEvent::Attached { view, at });
        Ok(())
    }

    fn detach_view(&mut self, view: ViewId) {
        let at = self.origin.elapsed();
        self.record(HostEvent::Detached { view, at });
    }

    fn animate_alpha(
        &mut self,
        view: ViewId,
        animation: AlphaAnimation,
        on_complete: AnimationCompletion,
    ) {
        let at = self.origin.elapsed();
        let mut state = self.state.lock();
        state.events.push(HostEvent::Animated {
            view,
            from: animation.from,
            to: animation.to,
            duration: animation.duration,
            at,
        });

        if state.hold_animations {
            state.held.push(on_complete);
            return;
        }

        let duration = animation.delay + animation.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            on_complete.finished();
        });
    }

    fn keep_on_screen(&mut self, predicate: KeepOnScreen, exit: LaunchExit) {
        let at = self.origin.elapsed();
        let mut state = self.state.lock();
        state.events.push(HostEvent::KeepOnScreen { at });
        state.keep = Some(predicate);
        state.exit = Some(exit);
    }
}

/// Hook calls as `(event, time since origin)`.
pub type HookLog = Arc<Mutex<Vec<(HookEvent, Duration)>>>;

/// A builder with the recording host registered and the launch splash off.
pub fn builder(host: &RecordingHost, config: serde_json::Value) -> SplashScreenBuilder {
    init_tracing();
    SplashScreen::builder()
        .with_plugin_config(config)
        .with_view_host(host.clone())
        .with_launch_start(host.origin())
        .show_on_launch(false)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
