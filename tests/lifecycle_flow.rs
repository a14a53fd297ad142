//! Integration tests for the show/hide/animate lifecycle.

mod common;

use common::{HookLog, RecordingHost, builder, ms};
use parking_lot::Mutex;
use serde_json::json;
use splash_lifecycle::prelude::*;
use std::sync::Arc;
use std::time::Duration;

async fn wait_for_state(splash: &SplashScreen, state: LifecycleState) {
    while splash.state() != state {
        tokio::time::sleep(ms(1)).await;
    }
}

fn recording_hook(
    origin: tokio::time::Instant,
    log: &HookLog,
) -> impl Fn(HookParams) -> Result<(), HookFailure> + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |params: HookParams| {
        log.lock().push((params.event, origin.elapsed()));
        if let Some(completion) = params.completion {
            completion.done();
        }
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_show_delay_in_seconds_and_default_fade_in() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash.show(json!({ "delay": 2 })).await.unwrap();

    let attached = host.attached();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].1, ms(2000));

    let animations = host.animations();
    assert_eq!(animations, vec![(0.0, 1.0, ms(200), ms(2000))]);
    assert_eq!(splash.state(), LifecycleState::Visible);
}

#[tokio::test(start_paused = true)]
async fn test_global_config_fade_in() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "fadeInDuration": 0.5, "android": { "startAlpha": 0.25 } }))
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    assert_eq!(host.animations(), vec![(0.25, 1.0, ms(500), ms(0))]);
}

#[tokio::test(start_paused = true)]
async fn test_second_show_is_rejected() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash.show(json!({})).await.unwrap();
    let err = splash.show(json!({ "source": "other" })).await.unwrap_err();

    assert_eq!(err, SplashError::AlreadyActive);
    assert_eq!(err.code().as_str(), "alreadyActive");
    assert_eq!(host.built(), 1);
    assert!(host.detached().is_empty());
    assert_eq!(splash.state(), LifecycleState::Visible);
}

#[tokio::test(start_paused = true)]
async fn test_hide_without_show() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    let err = splash.hide(json!({})).await.unwrap_err();
    assert!(matches!(err, SplashError::NoSplash(_)));
    assert_eq!(err.code(), ErrorCode::NoSplash);
    assert_eq!(
        err.to_string(),
        "No splash screen view is available: nothing is showing"
    );
    assert_eq!(splash.state(), LifecycleState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_hide_during_show_delay_resolves_show() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    let shower = splash.clone();
    let pending = tokio::spawn(async move { shower.show(json!({ "delay": 2 })).await });
    tokio::time::sleep(ms(500)).await;

    splash.hide(json!({})).await.unwrap();
    assert!(pending.await.unwrap().is_ok());

    assert!(host.attached().is_empty());
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_hide_fades_out_and_tears_down() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash.show(json!({})).await.unwrap();
    splash.hide(json!({ "delay": 0.5 })).await.unwrap();

    let animations = host.animations();
    assert_eq!(animations[1], (1.0, 0.0, ms(300), ms(700)));
    assert_eq!(host.detached(), vec![(ViewId(1), ms(1000))]);
    assert_eq!(splash.state(), LifecycleState::TornDown);

    // Nothing left to hide.
    let err = splash.hide(json!({})).await.unwrap_err();
    assert!(matches!(err, SplashError::NoSplash(_)));
}

#[tokio::test(start_paused = true)]
async fn test_hide_while_hiding() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();
    splash.show(json!({})).await.unwrap();

    let first = {
        let splash = splash.clone();
        tokio::spawn(async move { splash.hide(json!({ "delay": 1 })).await })
    };
    wait_for_state(&splash, LifecycleState::Hiding).await;

    assert_eq!(splash.hide(json!({})).await, Err(SplashError::AlreadyHiding));
    assert_eq!(splash.animate(json!({})).await, Err(SplashError::AlreadyHiding));
    assert_eq!(SplashError::AlreadyHiding.code(), ErrorCode::AlreadyActive);

    first.await.unwrap().unwrap();
    assert_eq!(host.detached().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_animate_without_hook_completes() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash.show(json!({})).await.unwrap();
    splash.animate(json!({})).await.unwrap();

    assert_eq!(host.detached().len(), 1);
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_animate_without_view() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    let err = splash.animate(json!({})).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoSplash);
}

#[tokio::test(start_paused = true)]
async fn test_animate_hook_receives_params() {
    let host = RecordingHost::new();
    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);

    let splash = builder(&host, json!({}))
        .with_hook(move |params| {
            if params.event == HookEvent::Animate {
                *sink.lock() = Some((
                    params.options.lookup(&["custom"]).is_some(),
                    params.options.lookup(&["delay"]).is_some(),
                    params.duration,
                    params.snapshot.state,
                    params.views.splash,
                ));
            }
            if let Some(completion) = params.completion {
                completion.done();
            }
            Ok(())
        })
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    splash
        .animate(json!({ "delay": 0.2, "custom": 5 }))
        .await
        .unwrap();

    let seen = seen.lock().take().unwrap();
    assert_eq!(
        seen,
        (true, false, Some(ms(700)), LifecycleState::Hiding, ViewId(1))
    );
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_animate_hook_completes_later() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({}))
        .with_hook(|params| {
            if let Some(completion) = params.completion {
                tokio::spawn(async move {
                    tokio::time::sleep(ms(500)).await;
                    completion.done();
                });
            }
            Ok(())
        })
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    splash.animate(json!({})).await.unwrap();

    // Fade-in ends at 200, the hook finishes 500 later.
    assert_eq!(host.detached(), vec![(ViewId(1), ms(700))]);
}

#[tokio::test(start_paused = true)]
async fn test_animate_hook_failure_tears_down() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({}))
        .with_hook(|params| match params.event {
            HookEvent::Animate => Err(HookFailure::Failed("no animation".into())),
            _ => Ok(()),
        })
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    let err = splash.animate(json!({})).await.unwrap_err();

    assert_eq!(err, SplashError::HookFailed("no animation".into()));
    assert_eq!(err.code().as_str(), "hookMethodFailed");
    assert_eq!(host.detached().len(), 1);
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_animate_hook_not_handled() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({}))
        .with_hook(|_| Err(HookFailure::NotHandled))
        .build()
        .await
        .unwrap();

    // Declined notification events do not affect show.
    splash.show(json!({})).await.unwrap();

    let err = splash.animate(json!({})).await.unwrap_err();
    assert_eq!(err, SplashError::HookNotFound(HookEvent::Animate));
    assert_eq!(err.code().as_str(), "hookMethodNotFound");
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_animate_hook_panic() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({}))
        .with_hook(|params| {
            if params.event.is_animation() {
                panic!("hook exploded");
            }
            Ok(())
        })
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    let err = splash.animate(json!({})).await.unwrap_err();
    assert_eq!(err, SplashError::HookFailed("hook exploded".into()));
    assert_eq!(host.detached().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_animate_hook_drops_completion() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({}))
        .with_hook(|params| {
            drop(params.completion);
            Ok(())
        })
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    let err = splash.animate(json!({})).await.unwrap_err();
    assert!(matches!(err, SplashError::HookFailed(_)));
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_before_show_failure_is_reported() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({}))
        .with_hook(|params| match params.event {
            HookEvent::BeforeShow => Err(HookFailure::Failed("bad setup".into())),
            _ => Ok(()),
        })
        .build()
        .await
        .unwrap();

    let err = splash.show(json!({})).await.unwrap_err();
    assert_eq!(err, SplashError::HookFailed("bad setup".into()));

    // The splash itself still came up and can be hidden.
    assert_eq!(splash.state(), LifecycleState::Visible);
    splash.hide(json!({})).await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_hook_events_in_order() {
    let host = RecordingHost::new();
    let log = HookLog::default();
    let splash = builder(&host, json!({}))
        .with_hook(recording_hook(host.origin(), &log))
        .build()
        .await
        .unwrap();

    splash.show(json!({})).await.unwrap();
    splash.animate(json!({ "delay": 1 })).await.unwrap();

    let log = log.lock().clone();
    assert_eq!(
        log,
        vec![
            (HookEvent::BeforeShow, ms(0)),
            (HookEvent::Animate, ms(1200)),
            (HookEvent::AfterShow, ms(1200)),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_auto_hide_after_show_duration() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash
        .show(json!({ "autoHide": true, "showDuration": 1 }))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    // Fade-in 200, visible 1000, fade-out 300.
    assert_eq!(host.detached(), vec![(ViewId(1), ms(1500))]);
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_animated_disables_auto_hide() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "autoHide": true })).build().await.unwrap();

    splash.show(json!({ "animated": true })).await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(host.detached().is_empty());
    assert_eq!(splash.state(), LifecycleState::Visible);
}

#[tokio::test(start_paused = true)]
async fn test_missing_source_then_retry() {
    let host = RecordingHost::new().missing("logo");
    let splash = builder(&host, json!({})).build().await.unwrap();

    let err = splash.show(json!({ "source": "logo" })).await.unwrap_err();
    assert_eq!(err, SplashError::NotFound("logo".into()));
    assert_eq!(err.code().as_str(), "notFound");
    assert_eq!(splash.state(), LifecycleState::Idle);

    host.fix();
    splash.show(json!({ "source": "logo" })).await.unwrap();
    assert_eq!(splash.state(), LifecycleState::Visible);
}

#[tokio::test(start_paused = true)]
async fn test_view_build_failure() {
    let host = RecordingHost::new().broken();
    let splash = builder(&host, json!({})).build().await.unwrap();

    let err = splash.show(json!({})).await.unwrap_err();
    assert_eq!(err, SplashError::NoSplash("inflation failed".into()));
    assert_eq!(splash.state(), LifecycleState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_fades_tear_down_once() {
    let host = RecordingHost::new().holding_animations();
    let log = HookLog::default();
    let splash = builder(&host, json!({}))
        .with_hook(recording_hook(host.origin(), &log))
        .build()
        .await
        .unwrap();

    let show = {
        let splash = splash.clone();
        tokio::spawn(async move { splash.show(json!({})).await })
    };
    while host.held_animations() < 1 {
        tokio::time::sleep(ms(1)).await;
    }

    let hide = {
        let splash = splash.clone();
        tokio::spawn(async move { splash.hide(json!({})).await })
    };
    while host.held_animations() < 2 {
        tokio::time::sleep(ms(1)).await;
    }

    host.cancel_animations();
    show.await.unwrap().unwrap();
    hide.await.unwrap().unwrap();

    splash.tear_down().await;

    assert_eq!(host.detached().len(), 1);
    let after_show = log
        .lock()
        .iter()
        .filter(|(event, _)| *event == HookEvent::AfterShow)
        .count();
    assert_eq!(after_show, 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_animation_counts_as_cancelled() {
    let host = RecordingHost::new().holding_animations();
    let splash = builder(&host, json!({})).build().await.unwrap();

    let show = {
        let splash = splash.clone();
        tokio::spawn(async move { splash.show(json!({})).await })
    };
    while host.held_animations() < 1 {
        tokio::time::sleep(ms(1)).await;
    }

    host.drop_animations();
    show.await.unwrap().unwrap();
    assert_eq!(splash.state(), LifecycleState::Visible);
}

#[tokio::test(start_paused = true)]
async fn test_tear_down_and_show_again() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash.show(json!({})).await.unwrap();
    splash.tear_down().await;
    assert_eq!(splash.state(), LifecycleState::TornDown);
    assert_eq!(host.detached().len(), 1);

    // Idempotent.
    splash.tear_down().await;
    assert_eq!(host.detached().len(), 1);

    splash.show(json!({})).await.unwrap();
    let snapshot = splash.snapshot();
    assert_eq!(snapshot.state, LifecycleState::Visible);
    assert_eq!(snapshot.cycle, 2);
    assert_eq!(host.built(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_spinner_follows_splash() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "showSpinner": true })).build().await.unwrap();

    splash.show(json!({})).await.unwrap();
    assert_eq!(host.attached().len(), 2);
    assert_eq!(host.animations().len(), 2);

    splash.hide(json!({})).await.unwrap();
    let detached: Vec<_> = host.detached().into_iter().map(|(view, _)| view).collect();
    assert_eq!(detached, vec![ViewId(2), ViewId(1)]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handles_tears_down() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({})).build().await.unwrap();

    splash.show(json!({})).await.unwrap();
    drop(splash);
    tokio::time::sleep(ms(10)).await;

    assert_eq!(host.detached().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_launch_splash_disabled_by_zero_show_duration() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "showDuration": 0 }))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();

    splash.show_on_launch().await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(host.attached().is_empty());
    assert_eq!(host.built(), 0);
    assert_eq!(splash.state(), LifecycleState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_negative_show_duration_keeps_launch_splash() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "showDuration": -1 }))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();
    tokio::time::sleep(ms(100)).await;

    assert_eq!(host.built(), 1);
    assert_eq!(host.attached(), vec![(ViewId(1), ms(0))]);
    assert!(splash.snapshot().is_launch_splash);
}

#[tokio::test(start_paused = true)]
async fn test_launch_auto_hide_measured_from_process_start() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "showDuration": 2, "autoHide": true }))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();

    wait_for_state(&splash, LifecycleState::Visible).await;
    assert!(splash.snapshot().is_launch_splash);
    assert_eq!(host.keep_on_screen(), Some(true));

    tokio::time::sleep(Duration::from_secs(5)).await;

    // Minimum time ends at 2000, then a 300 fade-out.
    assert_eq!(host.detached(), vec![(ViewId(1), ms(2300))]);
    assert_eq!(host.keep_on_screen(), Some(false));
}

#[tokio::test(start_paused = true)]
async fn test_launch_remaining_time_accounts_for_startup() {
    let host = RecordingHost::new();
    tokio::time::advance(ms(1500)).await;

    let splash = builder(&host, json!({ "showDuration": 2, "autoHide": true }))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    // Launch began at 0, the splash at 1500: 500 left, then the fade-out.
    assert_eq!(host.detached(), vec![(ViewId(1), ms(2300))]);
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_launch_hide_waits_for_minimum_time() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "showDuration": 1 }))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();

    wait_for_state(&splash, LifecycleState::Visible).await;
    splash.hide(json!({})).await.unwrap();

    assert_eq!(host.detached(), vec![(ViewId(1), ms(1300))]);
}

#[tokio::test(start_paused = true)]
async fn test_launch_animate_runs_after_exit() {
    let host = RecordingHost::new();
    let log = HookLog::default();
    let splash = builder(&host, json!({ "showDuration": 1 }))
        .with_hook(recording_hook(host.origin(), &log))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();

    tokio::time::sleep(ms(300)).await;
    let animate = {
        let splash = splash.clone();
        tokio::spawn(async move { splash.animate(json!({})).await })
    };
    wait_for_state(&splash, LifecycleState::Hiding).await;

    let snapshot = splash.snapshot();
    assert!(snapshot.is_hiding);
    assert!(snapshot.animate_requested);
    // Hiding, but the minimum time has not elapsed yet.
    assert_eq!(host.keep_on_screen(), Some(true));

    host.release_launch();
    animate.await.unwrap().unwrap();

    let log = log.lock().clone();
    assert_eq!(
        log,
        vec![
            (HookEvent::BeforeShow, ms(0)),
            (HookEvent::AnimateLaunch, ms(1000)),
            (HookEvent::AfterShow, ms(1000)),
        ]
    );
    assert_eq!(splash.state(), LifecycleState::TornDown);
}

#[tokio::test(start_paused = true)]
async fn test_launch_animate_without_hook() {
    let host = RecordingHost::new();
    let splash = builder(&host, json!({ "showDuration": 0.5 }))
        .show_on_launch(true)
        .build()
        .await
        .unwrap();

    wait_for_state(&splash, LifecycleState::Visible).await;
    host.release_launch();
    splash.animate(json!({})).await.unwrap();

    assert_eq!(host.detached(), vec![(ViewId(1), ms(500))]);
}
