//! Error types for splash-lifecycle.

use std::fmt;

use crate::hooks::HookEvent;

/// Result type alias for lifecycle operations.
pub type Result<T> = std::result::Result<T, SplashError>;

/// Outcome delivered to the caller of a `show`, `hide` or `animate` request.
pub type Outcome = Result<()>;

/// Errors surfaced to callers of lifecycle operations.
///
/// Option resolution never produces an error; a missing or mistyped option
/// silently degrades to its default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplashError {
    /// The named splash resource does not exist.
    #[error("No splash resource named \"{0}\" was found")]
    NotFound(String),

    /// There is no splash view to operate on, or the view could not be built.
    #[error("No splash screen view is available: {0}")]
    NoSplash(String),

    /// `show()` was called while a splash screen is already active.
    #[error("A splash screen is already active")]
    AlreadyActive,

    /// `hide()` or `animate()` was called while the splash is already hiding.
    #[error("The splash screen is already hiding")]
    AlreadyHiding,

    /// The registered hook does not handle the given event.
    #[error("No splash screen event handler accepted the {0} event")]
    HookNotFound(HookEvent),

    /// The registered hook failed while handling an event.
    #[error("The splash screen event handler failed: {0}")]
    HookFailed(String),

    /// The lifecycle task is no longer running.
    #[error("The splash screen lifecycle is no longer running")]
    Closed,
}

impl SplashError {
    /// The stable error code reported to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::NoSplash(_) | Self::Closed => ErrorCode::NoSplash,
            Self::AlreadyActive | Self::AlreadyHiding => ErrorCode::AlreadyActive,
            Self::HookNotFound(_) => ErrorCode::HookMethodNotFound,
            Self::HookFailed(_) => ErrorCode::HookMethodFailed,
        }
    }
}

/// String identifiers forming the contract with callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    /// `notFound`
    NotFound,
    /// `noSplash`
    NoSplash,
    /// `alreadyActive`
    AlreadyActive,
    /// `hookMethodNotFound`
    HookMethodNotFound,
    /// `hookMethodFailed`
    HookMethodFailed,
}

impl ErrorCode {
    /// The wire representation of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "notFound",
            Self::NoSplash => "noSplash",
            Self::AlreadyActive => "alreadyActive",
            Self::HookMethodNotFound => "hookMethodNotFound",
            Self::HookMethodFailed => "hookMethodFailed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading the global configuration or
/// assembling a splash screen.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to load configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to parse a configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// The file extension does not name a supported (or enabled) format.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The builder was not given a view host.
    #[error("A view host is required to build a splash screen")]
    MissingViewHost,

    /// Generic error for other cases.
    #[error("Configuration error: {0}")]
    Other(String),
}
