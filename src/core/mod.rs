//! Configuration loading and the splash screen handle.

mod builder;
mod handle;
mod loader;

pub use builder::{DEFAULT_PLUGIN_ID, SplashScreenBuilder};
pub use handle::SplashScreen;
pub use loader::ConfigLoader;
