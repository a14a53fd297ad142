//! Deferred re-entry into the lifecycle task.

use super::AnimationEnd;
use crate::error::Outcome;
use crate::sources::ConfigTree;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tracing::trace;

pub(crate) type Reply = oneshot::Sender<Outcome>;

/// A request for the lifecycle task.
#[derive(Debug)]
pub(crate) enum Command {
    ShowOnLaunch { reply: Reply },
    Show { options: ConfigTree, reply: Reply },
    Hide { options: ConfigTree, reply: Reply },
    Animate { options: ConfigTree, reply: Reply },
    TearDown { reply: oneshot::Sender<()> },
    Continue(Continuation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fade {
    In,
    Out,
}

/// A deferred step of a cycle. Steps for a cycle other than the current one
/// are dropped.
#[derive(Debug)]
pub(crate) enum Continuation {
    FadeIn { cycle: u64 },
    FadeEnded { cycle: u64, fade: Fade, end: AnimationEnd },
    AutoHide { cycle: u64 },
    FadeOut { cycle: u64 },
    RunAnimateHook { cycle: u64 },
    HookCompleted { cycle: u64, outcome: Outcome },
    LaunchExited { cycle: u64 },
}

impl Continuation {
    pub(crate) fn cycle(&self) -> u64 {
        match self {
            Self::FadeIn { cycle }
            | Self::FadeEnded { cycle, .. }
            | Self::AutoHide { cycle }
            | Self::FadeOut { cycle }
            | Self::RunAnimateHook { cycle }
            | Self::HookCompleted { cycle, .. }
            | Self::LaunchExited { cycle } => *cycle,
        }
    }
}

/// Posts commands back onto the lifecycle task, now or after a delay.
///
/// Holds only a weak sender, so pending timers and outstanding completions
/// never keep the task alive once every handle is gone.
#[derive(Debug, Clone)]
pub(crate) struct Scheduler {
    mailbox: mpsc::WeakUnboundedSender<Command>,
}

impl Scheduler {
    pub(crate) fn new(mailbox: mpsc::WeakUnboundedSender<Command>) -> Self {
        Self { mailbox }
    }

    /// Post a command. Returns false if the task is gone.
    pub(crate) fn post(&self, command: Command) -> bool {
        match self.mailbox.upgrade() {
            Some(sender) => sender.send(command).is_ok(),
            None => false,
        }
    }

    /// Post `continuation` once `after` has elapsed.
    pub(crate) fn schedule(&self, after: Duration, continuation: Continuation) {
        let deadline = Instant::now() + after;
        let scheduler = self.clone();
        trace!(?after, ?continuation, "Scheduling continuation");

        tokio::spawn(async move {
            sleep_until(deadline).await;
            if !scheduler.post(Command::Continue(continuation)) {
                trace!("Lifecycle gone, dropping continuation");
            }
        });
    }
}
