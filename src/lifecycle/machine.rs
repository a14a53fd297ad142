//! The splash screen state machine.

use super::completion::{AnimationCompletion, KeepOnScreen, LaunchExit};
use super::scheduler::{Command, Continuation, Fade, Reply, Scheduler};
use super::view_host::{
    AlphaAnimation, AttachParams, Interpolator, ViewError, ViewHandles, ViewHost, ViewRequest,
};
use super::{AnimationEnd, LifecycleSnapshot, LifecycleState};
use crate::error::{Outcome, SplashError};
use crate::hooks::{DispatchOutcome, HookCompletion, HookDispatcher, HookEvent, HookParams};
use crate::options::{AnimateOptions, HideOptions, Operation, OptionSet, ShowOptions, schema};
use crate::resolve::KeyPathResolver;
use crate::sources::ConfigTree;
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

const NO_VIEW: &str = "nothing is showing";

struct AnimateRequest {
    options: AnimateOptions,
    raw: ConfigTree,
    hook_scheduled: bool,
    hook_running: bool,
}

/// One show cycle, from `show()` to teardown.
struct Cycle {
    id: u64,
    is_launch: bool,
    show: ShowOptions,
    raw: ConfigTree,
    views: ViewHandles,
    attached: bool,
    spinner_attached: bool,
    fade_out: Duration,
    animate: Option<AnimateRequest>,
    launch_exited: bool,
    before_show_error: Option<SplashError>,
    pending_show: Option<Reply>,
    pending_hide: Option<Reply>,
    pending_animate: Option<Reply>,
    torn_down: bool,
}

/// The lifecycle state machine.
///
/// Owned by a single task: every request, timer and host completion arrives
/// as a [`Command`] on one channel and is handled to completion before the
/// next. Incompatible requests are rejected immediately rather than queued.
pub(crate) struct SplashLifecycle {
    host: Box<dyn ViewHost>,
    hooks: HookDispatcher,
    resolver: KeyPathResolver,
    global: Arc<ConfigTree>,
    scheduler: Scheduler,
    published: Arc<ArcSwap<LifecycleSnapshot>>,
    launch_start: Instant,
    state: LifecycleState,
    last_cycle: u64,
    cycle: Option<Cycle>,
}

impl SplashLifecycle {
    pub(crate) fn new(
        host: Box<dyn ViewHost>,
        hooks: HookDispatcher,
        resolver: KeyPathResolver,
        global: Arc<ConfigTree>,
        scheduler: Scheduler,
        published: Arc<ArcSwap<LifecycleSnapshot>>,
        launch_start: Instant,
    ) -> Self {
        Self {
            host,
            hooks,
            resolver,
            global,
            scheduler,
            published,
            launch_start,
            state: LifecycleState::Idle,
            last_cycle: 0,
            cycle: None,
        }
    }

    /// Handle commands until every sender is gone, then tear down.
    pub(crate) async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        debug!("Splash lifecycle started");

        while let Some(command) = commands.recv().await {
            self.handle(command);
            self.publish();
        }

        self.finish_cycle(Ok(()));
        self.publish();
        debug!("Splash lifecycle stopped");
    }

    /// A copy of the current state.
    pub(crate) fn snapshot(&self) -> LifecycleSnapshot {
        let cycle = self.cycle.as_ref();
        LifecycleSnapshot {
            state: self.state,
            cycle: self.last_cycle,
            is_launch_splash: cycle.is_some_and(|c| c.is_launch && !c.torn_down),
            is_hiding: cycle.is_some_and(|c| !c.torn_down && self.state == LifecycleState::Hiding),
            animate_requested: cycle.is_some_and(|c| !c.torn_down && c.animate.is_some()),
            source: cycle.map(|c| c.show.source.clone()),
            views: cycle.filter(|c| !c.torn_down).map(|c| c.views),
        }
    }

    fn publish(&self) {
        self.published.store(Arc::new(self.snapshot()));
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::ShowOnLaunch { reply } => self.show_on_launch(reply),
            Command::Show { options, reply } => self.show(Some(options), false, reply),
            Command::Hide { options, reply } => self.hide(options, reply),
            Command::Animate { options, reply } => self.animate(options, reply),
            Command::TearDown { reply } => {
                self.finish_cycle(Ok(()));
                let _ = reply.send(());
            }
            Command::Continue(continuation) => self.resume(continuation),
        }
    }

    fn show_on_launch(&mut self, reply: Reply) {
        self.show(None, true, reply);
    }

    fn show(&mut self, call: Option<ConfigTree>, is_launch: bool, reply: Reply) {
        let operation = if is_launch {
            Operation::Launch
        } else {
            Operation::Show
        };

        if !self.state.can_show() {
            warn!(%operation, state = %self.state, "Rejecting show, a splash is already active");
            respond(Some(reply), Err(SplashError::AlreadyActive));
            return;
        }

        let set = OptionSet::build(
            operation,
            schema::for_operation(operation),
            call.as_ref(),
            &self.global,
            &self.resolver,
        );
        debug!(%set, "Resolved options");
        let options = ShowOptions::from(&set);

        if is_launch && options.is_disabled() {
            info!("Launch splash disabled by a zero showDuration");
            respond(Some(reply), Ok(()));
            return;
        }

        let request = ViewRequest::new(&options, is_launch);
        let views = match self.host.build_view(&request) {
            Ok(views) => views,
            Err(ViewError::NotFound(name)) => {
                warn!(%operation, source = %name, "Splash resource not found");
                respond(Some(reply), Err(SplashError::NotFound(name)));
                return;
            }
            Err(ViewError::Build(message)) => {
                error!(%operation, %message, "Failed to build splash view");
                respond(Some(reply), Err(SplashError::NoSplash(message)));
                return;
            }
        };

        self.last_cycle += 1;
        let id = self.last_cycle;
        let delay = options.delay;
        let show_duration = options.show_duration;

        info!(cycle = id, %operation, source = %options.source, ?delay, "Showing splash");

        self.cycle = Some(Cycle {
            id,
            is_launch,
            fade_out: options.fade_out,
            show: options,
            raw: call.map(|tree| tree.without(schema::DELAY)).unwrap_or_default(),
            views,
            attached: false,
            spinner_attached: false,
            animate: None,
            launch_exited: false,
            before_show_error: None,
            pending_show: Some(reply),
            pending_hide: None,
            pending_animate: None,
            torn_down: false,
        });
        self.state = LifecycleState::Showing;
        self.publish();

        if is_launch {
            let predicate = KeepOnScreen::new(
                Arc::clone(&self.published),
                id,
                self.launch_start + show_duration,
            );
            let exit = LaunchExit::new(self.scheduler.clone(), id);
            self.host.keep_on_screen(predicate, exit);
        }

        self.scheduler
            .schedule(delay, Continuation::FadeIn { cycle: id });
    }

    fn hide(&mut self, call: ConfigTree, reply: Reply) {
        if self.state == LifecycleState::Hiding {
            warn!("Rejecting hide, the splash is already hiding");
            respond(Some(reply), Err(SplashError::AlreadyHiding));
            return;
        }

        if !self.state.is_active() {
            warn!(state = %self.state, "Rejecting hide, no splash view");
            respond(Some(reply), Err(SplashError::NoSplash(NO_VIEW.to_string())));
            return;
        }

        let set = OptionSet::build(
            Operation::Hide,
            schema::for_operation(Operation::Hide),
            Some(&call),
            &self.global,
            &self.resolver,
        );
        debug!(%set, "Resolved options");
        let options = HideOptions::from(&set);

        let remaining = self.remaining_show_time();
        let Some(cycle) = self.cycle.as_mut() else {
            respond(Some(reply), Err(SplashError::NoSplash(NO_VIEW.to_string())));
            return;
        };

        let mut delay = options.delay;
        if cycle.is_launch {
            delay += remaining;
        }

        cycle.pending_hide = Some(reply);
        self.begin_hide(delay, options.fade_out);
    }

    fn begin_hide(&mut self, delay: Duration, fade_out: Duration) {
        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };

        info!(cycle = cycle.id, ?delay, ?fade_out, "Hiding splash");
        cycle.fade_out = fade_out;
        let id = cycle.id;
        self.state = LifecycleState::Hiding;
        self.scheduler.schedule(delay, Continuation::FadeOut { cycle: id });
    }

    fn animate(&mut self, call: ConfigTree, reply: Reply) {
        if self.state == LifecycleState::Hiding {
            warn!("Rejecting animate, the splash is already hiding");
            respond(Some(reply), Err(SplashError::AlreadyHiding));
            return;
        }

        let active = self.state.is_active();
        let Some(cycle) = self.cycle.as_mut().filter(|c| active && !c.torn_down) else {
            warn!(state = %self.state, "Rejecting animate, no splash view");
            respond(Some(reply), Err(SplashError::NoSplash(NO_VIEW.to_string())));
            return;
        };

        let set = OptionSet::build(
            Operation::Animate,
            schema::for_operation(Operation::Animate),
            Some(&call),
            &self.global,
            &self.resolver,
        );
        debug!(%set, "Resolved options");
        let options = AnimateOptions::from(&set);
        let delay = options.delay;
        let id = cycle.id;

        cycle.pending_animate = Some(reply);
        cycle.animate = Some(AnimateRequest {
            options,
            raw: call.without(schema::DELAY),
            hook_scheduled: false,
            hook_running: false,
        });
        self.state = LifecycleState::Hiding;

        if cycle.is_launch {
            info!(cycle = id, "Animate requested for the launch splash");
            if cycle.launch_exited {
                self.schedule_launch_hook();
            }
            return;
        }

        info!(cycle = id, ?delay, "Animating splash");
        if let Some(request) = cycle.animate.as_mut() {
            request.hook_scheduled = true;
        }
        self.scheduler
            .schedule(delay, Continuation::RunAnimateHook { cycle: id });
    }

    /// Release the views of the current cycle and invoke the after-show hook.
    /// Does nothing if the cycle is already torn down.
    pub(crate) fn tear_down(&mut self) -> Outcome {
        let Some(cycle) = self.cycle.as_mut().filter(|c| !c.torn_down) else {
            return Ok(());
        };

        cycle.torn_down = true;
        if cycle.spinner_attached {
            if let Some(spinner) = cycle.views.spinner {
                self.host.detach_view(spinner);
            }
            cycle.spinner_attached = false;
        }
        if cycle.attached {
            self.host.detach_view(cycle.views.splash);
            cycle.attached = false;
        }

        info!(cycle = cycle.id, "Splash torn down");
        self.state = LifecycleState::TornDown;
        self.publish();

        let params = self.hook_params(HookEvent::AfterShow, None);
        match params.map(|params| self.hooks.invoke(params)) {
            Some(Err(error)) => Err(error),
            _ => Ok(()),
        }
    }

    /// Tear down and answer every caller still waiting on the cycle.
    fn finish_cycle(&mut self, outcome: Outcome) {
        let after_show = self.tear_down();

        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };

        let outcome = outcome.and(after_show);
        respond(cycle.pending_show.take(), Ok(()));
        respond(cycle.pending_hide.take(), outcome.clone());
        respond(cycle.pending_animate.take(), outcome);
    }

    fn resume(&mut self, continuation: Continuation) {
        let id = continuation.cycle();
        let current = self
            .cycle
            .as_ref()
            .filter(|c| c.id == id && !c.torn_down)
            .is_some();
        if !current {
            debug!(cycle = id, ?continuation, "Dropping stale continuation");
            return;
        }

        match continuation {
            Continuation::FadeIn { .. } => self.fade_in(),
            Continuation::FadeEnded {
                fade: Fade::In,
                end,
                ..
            } => self.fade_in_ended(end),
            Continuation::FadeEnded {
                fade: Fade::Out,
                end,
                ..
            } => {
                debug!(cycle = id, ?end, "Fade-out ended");
                self.finish_cycle(Ok(()));
            }
            Continuation::AutoHide { .. } => self.auto_hide(),
            Continuation::FadeOut { .. } => self.fade_out(),
            Continuation::RunAnimateHook { .. } => self.run_animate_hook(),
            Continuation::HookCompleted { outcome, .. } => self.animate_hook_completed(outcome),
            Continuation::LaunchExited { .. } => self.launch_exited(),
        }
    }

    fn fade_in(&mut self) {
        if self.state != LifecycleState::Showing {
            return;
        }

        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };

        let params = AttachParams {
            fullscreen: cycle.show.fullscreen,
            alpha: cycle.show.start_alpha,
        };
        if let Err(e) = self.host.attach_view(cycle.views.splash, &params) {
            error!(cycle = cycle.id, error = %e, "Failed to attach splash view");
            let error = SplashError::NoSplash(e.to_string());
            let reply = cycle.pending_show.take();
            self.finish_cycle(Ok(()));
            respond(reply, Err(error));
            return;
        }
        cycle.attached = true;

        if let Some(spinner) = cycle.views.spinner {
            match self.host.attach_view(spinner, &params) {
                Ok(()) => cycle.spinner_attached = true,
                Err(e) => warn!(cycle = cycle.id, error = %e, "Failed to attach spinner"),
            }
        }

        let animation = AlphaAnimation {
            from: cycle.show.start_alpha,
            to: 1.0,
            duration: cycle.show.fade_in,
            delay: Duration::ZERO,
            interpolator: Interpolator::Linear,
        };
        let id = cycle.id;
        let splash = cycle.views.splash;
        let spinner = cycle.views.spinner.filter(|_| cycle.spinner_attached);
        debug!(cycle = id, duration = ?animation.duration, "Fading in");

        let before_show = self
            .hook_params(HookEvent::BeforeShow, None)
            .map(|params| self.hooks.invoke(params));
        if let (Some(Err(error)), Some(cycle)) = (before_show, self.cycle.as_mut()) {
            cycle.before_show_error = Some(error);
        }

        self.host.animate_alpha(
            splash,
            animation,
            AnimationCompletion::fade(self.scheduler.clone(), id, Fade::In),
        );
        if let Some(spinner) = spinner {
            self.host
                .animate_alpha(spinner, animation, AnimationCompletion::ignored());
        }
    }

    fn fade_in_ended(&mut self, end: AnimationEnd) {
        if self.state == LifecycleState::Showing {
            self.state = LifecycleState::Visible;
            self.publish();
        }

        let remaining = self.remaining_show_time();
        let visible = self.state == LifecycleState::Visible;
        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };

        info!(cycle = cycle.id, ?end, state = %self.state, "Fade-in ended");
        let outcome = cycle.before_show_error.take().map_or(Ok(()), Err);
        respond(cycle.pending_show.take(), outcome);

        if visible && cycle.show.auto_hide {
            let after = if cycle.is_launch {
                remaining
            } else {
                cycle.show.show_duration
            };
            debug!(cycle = cycle.id, ?after, "Scheduling auto-hide");
            self.scheduler
                .schedule(after, Continuation::AutoHide { cycle: cycle.id });
        }
    }

    fn auto_hide(&mut self) {
        if self.state != LifecycleState::Visible {
            return;
        }

        let Some(fade_out) = self.cycle.as_ref().map(|c| c.show.fade_out) else {
            return;
        };
        self.begin_hide(Duration::ZERO, fade_out);
    }

    fn fade_out(&mut self) {
        if self.state != LifecycleState::Hiding {
            return;
        }

        let Some(cycle) = self.cycle.as_ref() else {
            return;
        };

        if !cycle.attached {
            debug!(cycle = cycle.id, "Splash never attached, nothing to fade");
            self.finish_cycle(Ok(()));
            return;
        }

        let animation = AlphaAnimation {
            from: 1.0,
            to: 0.0,
            duration: cycle.fade_out,
            delay: Duration::ZERO,
            interpolator: Interpolator::Linear,
        };
        let id = cycle.id;
        let splash = cycle.views.splash;
        let spinner = cycle.views.spinner.filter(|_| cycle.spinner_attached);
        debug!(cycle = id, duration = ?animation.duration, "Fading out");

        self.host.animate_alpha(
            splash,
            animation,
            AnimationCompletion::fade(self.scheduler.clone(), id, Fade::Out),
        );
        if let Some(spinner) = spinner {
            self.host
                .animate_alpha(spinner, animation, AnimationCompletion::ignored());
        }
    }

    fn launch_exited(&mut self) {
        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };

        debug!(cycle = cycle.id, "Launch screen exited");
        cycle.launch_exited = true;
        if cycle.animate.is_some() {
            self.schedule_launch_hook();
        }
    }

    /// Run the launch animate hook after its delay plus the rest of the
    /// minimum show time.
    fn schedule_launch_hook(&mut self) {
        let remaining = self.remaining_show_time();
        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };
        let Some(request) = cycle.animate.as_mut().filter(|r| !r.hook_scheduled) else {
            return;
        };

        request.hook_scheduled = true;
        let after = request.options.delay + remaining;
        debug!(cycle = cycle.id, ?after, "Scheduling launch animate hook");
        self.scheduler
            .schedule(after, Continuation::RunAnimateHook { cycle: cycle.id });
    }

    fn run_animate_hook(&mut self) {
        if self.state != LifecycleState::Hiding {
            return;
        }

        let Some(cycle) = self.cycle.as_mut() else {
            return;
        };
        let Some(request) = cycle.animate.as_mut() else {
            return;
        };

        request.hook_running = true;
        let event = if cycle.is_launch {
            HookEvent::AnimateLaunch
        } else {
            HookEvent::Animate
        };
        let scheduler = self.scheduler.clone();
        let id = cycle.id;
        let completion = HookCompletion::new(move |outcome| {
            scheduler.post(Command::Continue(Continuation::HookCompleted {
                cycle: id,
                outcome,
            }));
        });

        let Some(params) = self.hook_params(event, Some(completion)) else {
            return;
        };

        match self.hooks.invoke(params) {
            Ok(DispatchOutcome::Invoked) => debug!(cycle = id, %event, "Waiting for hook completion"),
            Ok(outcome) => debug!(cycle = id, %event, ?outcome, "Animate hook finished"),
            Err(error) => {
                warn!(cycle = id, %event, %error, "Animate hook failed, tearing down");
                if let Some(request) = self.cycle.as_mut().and_then(|c| c.animate.as_mut()) {
                    request.hook_running = false;
                }
                self.finish_cycle(Err(error));
            }
        }
    }

    fn animate_hook_completed(&mut self, outcome: Outcome) {
        let running = self
            .cycle
            .as_ref()
            .and_then(|c| c.animate.as_ref())
            .is_some_and(|r| r.hook_running);
        if !running {
            return;
        }

        if let Err(error) = &outcome {
            warn!(%error, "Animate hook reported failure, tearing down");
        }
        self.finish_cycle(outcome);
    }

    fn hook_params(&self, event: HookEvent, completion: Option<HookCompletion>) -> Option<HookParams> {
        let cycle = self.cycle.as_ref()?;
        let (options, duration) = match (&cycle.animate, event.is_animation()) {
            (Some(request), true) => (request.raw.clone(), Some(request.options.duration)),
            _ => (cycle.raw.clone(), None),
        };

        Some(HookParams {
            event,
            source: cycle.show.source.clone(),
            views: cycle.views,
            options,
            duration,
            snapshot: self.snapshot(),
            completion,
        })
    }

    /// What is left of the launch splash's minimum show time.
    fn remaining_show_time(&self) -> Duration {
        match self.cycle.as_ref() {
            Some(cycle) if cycle.is_launch => (self.launch_start + cycle.show.show_duration)
                .saturating_duration_since(Instant::now()),
            _ => Duration::ZERO,
        }
    }
}

fn respond(reply: Option<Reply>, outcome: Outcome) {
    if let Some(reply) = reply {
        let _ = reply.send(outcome);
    }
}
