//! File-based configuration source.

use super::ConfigSource;
use crate::error::ConfigError;
use crate::sources::ConfigMap;
use std::fs;
use std::path::PathBuf;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

/// File-based configuration source.
///
/// Loads the application configuration (e.g. `capacitor.config.json`) with
/// format detection based on the file extension. JSON is always supported;
/// YAML and TOML require the `yaml` and `toml` features.
///
/// Files are parsed straight into config values, so keys keep their case.
///
/// # Examples
///
/// ```rust,no_run
/// use splash_lifecycle::sources::FileSource;
///
/// let source = FileSource::new("capacitor.config.json");
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
}

impl FileSource {
    /// Create a new file source with automatic format detection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Determine the file format from the extension.
    fn detect_format(&self) -> Result<Format, ConfigError> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::UnsupportedFormat(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "json" => Ok(Format::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Format::Yaml),
            #[cfg(feature = "toml")]
            "toml" => Ok(Format::Toml),
            _ => Err(ConfigError::UnsupportedFormat(format!(
                "Unsupported file extension: {}",
                extension
            ))),
        }
    }

    fn parse(&self, format: Format, contents: &str) -> Result<ConfigMap, ConfigError> {
        let parsed = match format {
            Format::Json => serde_json::from_str::<ConfigMap>(contents).map_err(|e| e.to_string()),
            #[cfg(feature = "yaml")]
            Format::Yaml => serde_yaml::from_str::<ConfigMap>(contents).map_err(|e| e.to_string()),
            #[cfg(feature = "toml")]
            Format::Toml => toml::from_str::<ConfigMap>(contents).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<ConfigMap, ConfigError> {
        let format = self.detect_format()?;

        if !self.path.exists() {
            return Err(ConfigError::LoadError(format!(
                "Configuration file not found: {}",
                self.path.display()
            )));
        }

        let contents = fs::read_to_string(&self.path)?;
        self.parse(format, &contents)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
