//! Option resolution.
//!
//! Every operation resolves its options once, up front, from the call
//! options, the global plugin configuration and the schema defaults, in that
//! order. The result is an immutable [`OptionSet`]; [`ShowOptions`],
//! [`HideOptions`] and [`AnimateOptions`] are typed views over it.

mod animate;
mod appearance;
mod duration;
mod hide;
mod option_set;
pub mod schema;
mod show;

pub use animate::AnimateOptions;
pub use appearance::{Argb, ImageDisplayMode, SpinnerStyle};
pub use duration::{DURATION_MS_THRESHOLD, to_millis};
pub use hide::HideOptions;
pub use option_set::{Operation, OptionDefault, OptionEntry, OptionSet, OptionSpec, Provenance};
pub use show::ShowOptions;
