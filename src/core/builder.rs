//! Builder for constructing a running splash screen lifecycle.

use crate::core::{ConfigLoader, SplashScreen};
use crate::error::ConfigError;
use crate::hooks::{HookDispatcher, HookFailure, HookFn, HookParams};
use crate::lifecycle::scheduler::Scheduler;
use crate::lifecycle::{LifecycleSnapshot, SplashLifecycle, ViewHost};
use crate::resolve::{DEFAULT_PLATFORM_PREFIX, KeyPathResolver};
use crate::sources::{ConfigSource, FileSource, MemorySource};
use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info};

/// Plugin id used when none is configured.
pub const DEFAULT_PLUGIN_ID: &str = "SplashScreen";

/// Builder for a [`SplashScreen`].
///
/// Loads the global configuration, registers the view host and the optional
/// hook, then spawns the lifecycle task. Unless disabled, the launch splash
/// is started as soon as the lifecycle is up.
///
/// # Examples
///
/// ```rust,no_run
/// use splash_lifecycle::prelude::*;
///
/// # async fn example(host: impl ViewHost) -> Result<(), ConfigError> {
/// let splash = SplashScreen::builder()
///     .with_file("capacitor.config.json")
///     .with_platform_prefix("android")
///     .with_view_host(host)
///     .with_hook(|params| {
///         if let Some(completion) = params.completion {
///             completion.done();
///         }
///         Ok(())
///     })
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SplashScreenBuilder {
    file_paths: Vec<PathBuf>,
    custom_sources: Vec<Box<dyn ConfigSource>>,
    plugin_configs: Vec<serde_json::Value>,
    plugin_id: String,
    platform_prefix: String,
    host: Option<Box<dyn ViewHost>>,
    hook: Option<HookFn>,
    launch_start: Option<Instant>,
    show_on_launch: bool,
}

impl SplashScreenBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            custom_sources: Vec::new(),
            plugin_configs: Vec::new(),
            plugin_id: DEFAULT_PLUGIN_ID.to_string(),
            platform_prefix: DEFAULT_PLATFORM_PREFIX.to_string(),
            host: None,
            hook: None,
            launch_start: None,
            show_on_launch: true,
        }
    }

    /// Add an application config file. The plugin section is read from
    /// `plugins.<pluginId>`.
    ///
    /// Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Add a custom configuration source holding the whole application config.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Supply the plugin section directly. Overrides files and sources.
    pub fn with_plugin_config(mut self, config: serde_json::Value) -> Self {
        self.plugin_configs.push(config);
        self
    }

    /// Set the plugin id (default `SplashScreen`).
    pub fn with_plugin_id(mut self, id: impl Into<String>) -> Self {
        self.plugin_id = id.into();
        self
    }

    /// Set the platform prefix (default `android`).
    pub fn with_platform_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.platform_prefix = prefix.into();
        self
    }

    /// Register the view host. Required.
    pub fn with_view_host<H: ViewHost>(mut self, host: H) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Register the host hook.
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(HookParams) -> Result<(), HookFailure> + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Set when the process launched. Defaults to the time of `build()`.
    pub fn with_launch_start(mut self, start: Instant) -> Self {
        self.launch_start = Some(start);
        self
    }

    /// Whether to start the launch splash on build (default true).
    pub fn show_on_launch(mut self, enabled: bool) -> Self {
        self.show_on_launch = enabled;
        self
    }

    /// Load the configuration and start the lifecycle.
    ///
    /// Must be called within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No view host was registered
    /// - A configuration file is missing, unreadable or unparsable
    pub async fn build(self) -> Result<SplashScreen, ConfigError> {
        let host = self.host.ok_or(ConfigError::MissingViewHost)?;
        let mut loader = ConfigLoader::new();

        for (index, path) in self.file_paths.iter().enumerate() {
            let priority = 100 + (index as i32 * 10);
            loader.add_source(Box::new(FileSource::new(path).with_priority(priority)));
        }

        for source in self.custom_sources {
            loader.add_source(source);
        }

        for (index, config) in self.plugin_configs.into_iter().enumerate() {
            let mut plugins = serde_json::Map::new();
            plugins.insert(self.plugin_id.clone(), config);
            let wrapped = serde_json::json!({ "plugins": plugins });
            let source = MemorySource::from_json("plugin", wrapped).with_priority(200 + index as i32);
            loader.add_source(Box::new(source));
        }

        debug!(sources = ?loader.source_names(), "Loading configuration");
        let global = Arc::new(loader.load()?.subtree(&["plugins", self.plugin_id.as_str()]));

        let (commands, inbox) = mpsc::unbounded_channel();
        let snapshot = Arc::new(ArcSwap::from_pointee(LifecycleSnapshot::default()));
        let lifecycle = SplashLifecycle::new(
            host,
            HookDispatcher::new(self.hook),
            KeyPathResolver::new(self.platform_prefix),
            Arc::clone(&global),
            Scheduler::new(commands.downgrade()),
            Arc::clone(&snapshot),
            self.launch_start.unwrap_or_else(Instant::now),
        );
        tokio::spawn(lifecycle.run(inbox));

        info!(plugin = %self.plugin_id, "Splash screen lifecycle started");
        let screen = SplashScreen::new(commands, snapshot, global);
        if self.show_on_launch {
            screen.start_launch();
        }

        Ok(screen)
    }
}

impl Default for SplashScreenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
