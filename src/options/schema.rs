//! Option keys, defaults and per-operation schemas.

use super::option_set::{Operation, OptionDefault, OptionSpec};

/// Splash source: a drawable/storyboard name, or `*` for the launch screen's.
pub const SOURCE: &str = "source";
/// Delay before the operation starts.
pub const DELAY: &str = "delay";
/// How long the splash stays up (launch: minimum time since process start).
pub const SHOW_DURATION: &str = "showDuration";
/// Fade-in length.
pub const FADE_IN_DURATION: &str = "fadeInDuration";
/// Fade-out length.
pub const FADE_OUT_DURATION: &str = "fadeOutDuration";
/// Length of a hook-driven animation.
pub const ANIMATION_DURATION: &str = "animationDuration";
/// Hide automatically after `showDuration`.
pub const AUTO_HIDE: &str = "autoHide";
/// The content animates itself; disables auto-hide.
pub const ANIMATED: &str = "animated";
/// Alias of [`ANIMATED`].
pub const ANIMATE: &str = "animate";
/// Show a progress spinner over the splash.
pub const SHOW_SPINNER: &str = "showSpinner";
/// Spinner tint.
pub const SPINNER_COLOR: &str = "spinnerColor";
/// Splash background color.
pub const BACKGROUND_COLOR: &str = "backgroundColor";
/// Alpha the fade-in starts from.
pub const START_ALPHA: &str = "startAlpha";
/// Platform option suffix: spinner style.
pub const SPINNER_STYLE: &str = "SpinnerStyle";
/// Platform option suffix: how the image is scaled.
pub const IMAGE_DISPLAY_MODE: &str = "ImageDisplayMode";
/// Platform option suffix: cover the status bar.
pub const FULLSCREEN: &str = "Fullscreen";

/// Source meaning "whatever the launch screen uses".
pub const DEFAULT_SOURCE: &str = "*";
/// Default `showDuration`, milliseconds.
pub const DEFAULT_SHOW_DURATION_MS: f64 = 700.0;
/// Default `fadeInDuration`, milliseconds.
pub const DEFAULT_FADE_IN_DURATION_MS: f64 = 200.0;
/// Default `fadeOutDuration`, milliseconds.
pub const DEFAULT_FADE_OUT_DURATION_MS: f64 = 300.0;
/// Default `animationDuration`, milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 700.0;

/// Options for `show()` and the launch splash.
pub const SHOW: &[OptionSpec] = &[
    OptionSpec::string(SOURCE, OptionDefault::Str(DEFAULT_SOURCE)),
    OptionSpec::duration(DELAY, 0.0),
    OptionSpec::duration(FADE_IN_DURATION, DEFAULT_FADE_IN_DURATION_MS),
    OptionSpec::duration(SHOW_DURATION, DEFAULT_SHOW_DURATION_MS),
    OptionSpec::duration(FADE_OUT_DURATION, DEFAULT_FADE_OUT_DURATION_MS),
    OptionSpec::boolean(AUTO_HIDE, false),
    OptionSpec::boolean(ANIMATED, false),
    OptionSpec::boolean(ANIMATE, false),
    OptionSpec::boolean(SHOW_SPINNER, false),
    OptionSpec::string(SPINNER_COLOR, OptionDefault::None),
    OptionSpec::string(BACKGROUND_COLOR, OptionDefault::None),
    OptionSpec::float(START_ALPHA, 0.0),
    OptionSpec::string(SPINNER_STYLE, OptionDefault::None).for_platform(),
    OptionSpec::string(IMAGE_DISPLAY_MODE, OptionDefault::None).for_platform(),
    OptionSpec::boolean(FULLSCREEN, false).for_platform(),
];

/// Options for `hide()`.
pub const HIDE: &[OptionSpec] = &[
    OptionSpec::duration(DELAY, 0.0),
    OptionSpec::duration(FADE_OUT_DURATION, DEFAULT_FADE_OUT_DURATION_MS),
];

/// Options for `animate()`.
pub const ANIMATE_SCHEMA: &[OptionSpec] = &[
    OptionSpec::duration(DELAY, 0.0),
    OptionSpec::duration(ANIMATION_DURATION, DEFAULT_ANIMATION_DURATION_MS),
];

/// The schema for an operation.
pub fn for_operation(operation: Operation) -> &'static [OptionSpec] {
    match operation {
        Operation::Launch | Operation::Show => SHOW,
        Operation::Hide => HIDE,
        Operation::Animate => ANIMATE_SCHEMA,
    }
}
