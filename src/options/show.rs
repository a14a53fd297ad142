//! Typed view of show and launch options.

use super::appearance::{Argb, ImageDisplayMode, SpinnerStyle};
use super::option_set::OptionSet;
use super::schema;
use std::time::Duration;

/// Everything `show()` and the launch splash need, read from an [`OptionSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShowOptions {
    /// Splash source name, `*` for the launch screen's.
    pub source: String,
    /// Delay before the fade-in starts.
    pub delay: Duration,
    /// Fade-in length.
    pub fade_in: Duration,
    /// Time on screen. For the launch splash, measured from process start.
    /// Negative values schedule as zero.
    pub show_duration: Duration,
    /// `showDuration` was configured as exactly zero.
    pub disabled: bool,
    /// Fade-out length when auto-hiding.
    pub fade_out: Duration,
    /// Hide after `show_duration`. Always false when `animated` is set.
    pub auto_hide: bool,
    /// The splash will be taken down by `animate()`.
    pub animated: bool,
    /// Show a spinner over the splash.
    pub show_spinner: bool,
    /// Alpha the fade-in starts from.
    pub start_alpha: f32,
    /// Background color, if a valid one was configured.
    pub background: Option<Argb>,
    /// Spinner tint, if a valid one was configured.
    pub spinner_color: Option<Argb>,
    /// Spinner appearance.
    pub spinner_style: SpinnerStyle,
    /// Image scaling.
    pub display_mode: ImageDisplayMode,
    /// Cover the status bar.
    pub fullscreen: bool,
}

impl ShowOptions {
    /// Whether `showDuration` resolved to exactly zero, which disables the
    /// launch splash.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl From<&OptionSet> for ShowOptions {
    fn from(set: &OptionSet) -> Self {
        let animated = set.boolean(schema::ANIMATED).unwrap_or(false)
            || set.boolean(schema::ANIMATE).unwrap_or(false);

        Self {
            source: set
                .string(schema::SOURCE)
                .unwrap_or(schema::DEFAULT_SOURCE)
                .to_string(),
            delay: set.duration(schema::DELAY),
            fade_in: set.duration(schema::FADE_IN_DURATION),
            show_duration: set.duration(schema::SHOW_DURATION),
            disabled: set.raw(schema::SHOW_DURATION).as_f64() == Some(0.0),
            fade_out: set.duration(schema::FADE_OUT_DURATION),
            auto_hide: !animated && set.boolean(schema::AUTO_HIDE).unwrap_or(false),
            animated,
            show_spinner: set.boolean(schema::SHOW_SPINNER).unwrap_or(false),
            start_alpha: set.float(schema::START_ALPHA).unwrap_or(0.0).clamp(0.0, 1.0),
            background: Argb::parse_option(
                schema::BACKGROUND_COLOR,
                set.string(schema::BACKGROUND_COLOR),
            ),
            spinner_color: Argb::parse_option(
                schema::SPINNER_COLOR,
                set.string(schema::SPINNER_COLOR),
            ),
            spinner_style: SpinnerStyle::from_name(set.string(schema::SPINNER_STYLE)),
            display_mode: set
                .string(schema::IMAGE_DISPLAY_MODE)
                .and_then(ImageDisplayMode::parse)
                .unwrap_or_default(),
            fullscreen: set.boolean(schema::FULLSCREEN).unwrap_or(false),
        }
    }
}
