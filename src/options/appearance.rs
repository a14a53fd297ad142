//! Colors, image display modes and spinner styles.

use std::fmt;
use tracing::debug;

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// The platform's default background (opaque white).
    pub const SYSTEM_BACKGROUND: Self = Self(0xffff_ffff);
    /// The platform's default text color (opaque black).
    pub const SYSTEM_TEXT: Self = Self(0xff00_0000);

    /// Parse a color.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` (the `#` is
    /// optional, alpha comes last as in CSS), plus the names
    /// `systemBackground` and `systemText`. Returns `None` for anything else.
    ///
    /// ```rust
    /// use splash_lifecycle::options::Argb;
    ///
    /// assert_eq!(Argb::parse("#f00"), Some(Argb(0xffff0000)));
    /// assert_eq!(Argb::parse("#11223380"), Some(Argb(0x80112233)));
    /// assert_eq!(Argb::parse("purple"), None);
    /// ```
    pub fn parse(color: &str) -> Option<Self> {
        match color {
            "systemBackground" => return Some(Self::SYSTEM_BACKGROUND),
            "systemText" => return Some(Self::SYSTEM_TEXT),
            _ => {}
        }

        let hex = color.strip_prefix('#').unwrap_or(color);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };

        let (rgb, alpha) = match expanded.len() {
            6 => (expanded.as_str(), "ff"),
            _ => expanded.split_at(6),
        };

        u32::from_str_radix(&format!("{alpha}{rgb}"), 16)
            .ok()
            .map(Self)
    }

    /// Parse an optional color, logging and dropping invalid values.
    pub(crate) fn parse_option(key: &str, color: Option<&str>) -> Option<Self> {
        let color = color?;
        let parsed = Self::parse(color);
        if parsed.is_none() {
            debug!(key, color, "Ignoring invalid color");
        }
        parsed
    }

    /// The alpha channel.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

/// How the splash image is scaled into the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageDisplayMode {
    /// Stretch to fill, ignoring aspect ratio.
    Fill,
    /// Scale to cover, cropping the overflow.
    AspectFill,
    /// Scale to fit, centered.
    #[default]
    Fit,
    /// Scale to fit, aligned to the top.
    FitTop,
    /// Scale to fit, aligned to the bottom.
    FitBottom,
    /// No scaling, centered.
    Center,
}

impl ImageDisplayMode {
    /// Parse a display mode name, ignoring case; unknown names give `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "fill" => Some(Self::Fill),
            "aspectfill" => Some(Self::AspectFill),
            "fit" => Some(Self::Fit),
            "fittop" => Some(Self::FitTop),
            "fitbottom" => Some(Self::FitBottom),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Spinner appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpinnerStyle {
    /// Small circular spinner.
    Small,
    /// Small, inverse colors.
    SmallInverse,
    /// Medium circular spinner.
    #[default]
    Medium,
    /// Medium, inverse colors.
    MediumInverse,
    /// Large circular spinner.
    Large,
    /// Large, inverse colors.
    LargeInverse,
    /// Horizontal progress bar.
    Horizontal,
}

impl SpinnerStyle {
    /// Style for a configured name. Absent gives the default; an unknown
    /// name gives [`SpinnerStyle::Large`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None => Self::default(),
            Some("small") => Self::Small,
            Some("smallInverse") => Self::SmallInverse,
            Some("medium") => Self::Medium,
            Some("mediumInverse") => Self::MediumInverse,
            Some("large") => Self::Large,
            Some("largeInverse") => Self::LargeInverse,
            Some("horizontal") => Self::Horizontal,
            Some(other) => {
                debug!(style = other, "Unknown spinner style, using large");
                Self::Large
            }
        }
    }

    /// Whether this style is a horizontal bar.
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}
