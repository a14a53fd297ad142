//! Fully resolved, typed options for a single operation.

use super::duration::to_millis;
use crate::resolve::{KeyPathResolver, ResolvedValue, ValueType};
use crate::sources::ConfigTree;
use std::fmt;
use std::time::Duration;

/// The operation an option set is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// The automatic splash shown at process launch.
    Launch,
    /// An explicit `show()` request.
    Show,
    /// A `hide()` request, or the automatic hide after `showDuration`.
    Hide,
    /// An `animate()` request.
    Animate,
}

impl Operation {
    /// Name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Animate => "animate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resolved option came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// The options passed with the request.
    Call,
    /// The global plugin configuration.
    Global,
    /// The schema default.
    Default,
}

/// The default value of an option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionDefault {
    /// No default; the option stays absent.
    None,
    /// A string default.
    Str(&'static str),
    /// A numeric default. Durations are given in milliseconds.
    Number(f64),
    /// A boolean default.
    Bool(bool),
}

/// Declaration of one option: its key, expected type and default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec {
    /// The key, or for platform options the suffix appended to the platform prefix.
    pub key: &'static str,
    /// The expected type.
    pub ty: ValueType,
    /// The default used when neither source has the option.
    pub default: OptionDefault,
    /// Normalize as a seconds-or-milliseconds duration.
    pub duration: bool,
    /// The key is platform-specific (`<prefix><key>`).
    pub platform: bool,
}

impl OptionSpec {
    /// A string option.
    pub const fn string(key: &'static str, default: OptionDefault) -> Self {
        Self {
            key,
            ty: ValueType::String,
            default,
            duration: false,
            platform: false,
        }
    }

    /// A boolean option.
    pub const fn boolean(key: &'static str, default: bool) -> Self {
        Self {
            key,
            ty: ValueType::Bool,
            default: OptionDefault::Bool(default),
            duration: false,
            platform: false,
        }
    }

    /// A single-precision numeric option.
    pub const fn float(key: &'static str, default: f64) -> Self {
        Self {
            key,
            ty: ValueType::Float,
            default: OptionDefault::Number(default),
            duration: false,
            platform: false,
        }
    }

    /// A duration, default in milliseconds.
    pub const fn duration(key: &'static str, default_ms: f64) -> Self {
        Self {
            key,
            ty: ValueType::Double,
            default: OptionDefault::Number(default_ms),
            duration: true,
            platform: false,
        }
    }

    /// Mark the option as platform-specific.
    pub const fn for_platform(mut self) -> Self {
        self.platform = true;
        self
    }

    fn default_value(&self) -> ResolvedValue {
        match self.default {
            OptionDefault::None => ResolvedValue::Absent,
            OptionDefault::Str(s) => ResolvedValue::String(s.to_string()),
            OptionDefault::Bool(b) => ResolvedValue::Bool(b),
            OptionDefault::Number(n) if self.duration => ResolvedValue::Int(n as i64),
            OptionDefault::Number(n) => match self.ty {
                ValueType::Float => ResolvedValue::Float(n as f32),
                ValueType::Int => ResolvedValue::Int(n as i64),
                _ => ResolvedValue::Double(n),
            },
        }
    }

    /// Configured durations are stored as whole milliseconds. Defaults are
    /// already in milliseconds.
    fn normalize(&self, value: &ResolvedValue, provenance: Provenance) -> ResolvedValue {
        if !self.duration || provenance == Provenance::Default {
            return value.clone();
        }

        match value.as_f64() {
            Some(n) => ResolvedValue::Int(i64::try_from(to_millis(n)).unwrap_or(i64::MAX)),
            None => value.clone(),
        }
    }
}

/// One resolved option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    /// The schema key.
    pub key: &'static str,
    /// The key path that was resolved.
    pub path: String,
    /// The resolved value, or the default.
    pub value: ResolvedValue,
    /// The value as configured, before duration normalization.
    pub raw: ResolvedValue,
    /// Where the value came from.
    pub provenance: Provenance,
}

/// An immutable record of resolved options for one operation.
///
/// Each option is looked up in the call options first, then the global
/// configuration, then falls back to the schema default. Building is pure:
/// the same inputs always produce the same set.
///
/// # Examples
///
/// ```rust
/// use splash_lifecycle::options::{schema, OptionSet, Operation, Provenance};
/// use splash_lifecycle::resolve::KeyPathResolver;
/// use splash_lifecycle::sources::ConfigTree;
/// use serde_json::json;
///
/// let call = ConfigTree::from_json(json!({ "delay": 2 }));
/// let global = ConfigTree::from_json(json!({ "fadeInDuration": 400 }));
/// let set = OptionSet::build(
///     Operation::Show,
///     schema::SHOW,
///     Some(&call),
///     &global,
///     &KeyPathResolver::default(),
/// );
///
/// assert_eq!(set.millis(schema::DELAY), Some(2000));
/// assert_eq!(set.millis(schema::FADE_IN_DURATION), Some(400));
/// assert_eq!(set.provenance(schema::SHOW_DURATION), Some(Provenance::Default));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSet {
    operation: Operation,
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    /// Resolve every option of `schema`.
    ///
    /// Pass `None` for `call` when no request is associated with the
    /// operation (the launch splash, an automatic hide); the call source is
    /// then never consulted.
    pub fn build(
        operation: Operation,
        schema: &[OptionSpec],
        call: Option<&ConfigTree>,
        global: &ConfigTree,
        resolver: &KeyPathResolver,
    ) -> Self {
        let entries = schema
            .iter()
            .map(|spec| {
                let path = if spec.platform {
                    resolver.platform_key(spec.key)
                } else {
                    spec.key.to_string()
                };

                let from_call = call
                    .map(|tree| resolver.resolve(tree, &path, spec.ty))
                    .filter(|value| !value.is_absent())
                    .map(|value| (value, Provenance::Call));

                let (raw, provenance) = from_call
                    .or_else(|| {
                        let value = resolver.resolve(global, &path, spec.ty);
                        (!value.is_absent()).then_some((value, Provenance::Global))
                    })
                    .unwrap_or_else(|| (spec.default_value(), Provenance::Default));

                OptionEntry {
                    key: spec.key,
                    path,
                    value: spec.normalize(&raw, provenance),
                    raw,
                    provenance,
                }
            })
            .collect();

        Self { operation, entries }
    }

    /// The operation this set was built for.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// All entries, in schema order.
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// The entry for a schema key.
    pub fn get(&self, key: &str) -> Option<&OptionEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// The resolved value for a schema key; absent if the key is not in the schema.
    pub fn value(&self, key: &str) -> &ResolvedValue {
        self.get(key)
            .map(|entry| &entry.value)
            .unwrap_or(&ResolvedValue::Absent)
    }

    /// The value for a schema key as it was configured. Durations are not
    /// normalized and may be negative.
    pub fn raw(&self, key: &str) -> &ResolvedValue {
        self.get(key)
            .map(|entry| &entry.raw)
            .unwrap_or(&ResolvedValue::Absent)
    }

    /// Where the value for a schema key came from.
    pub fn provenance(&self, key: &str) -> Option<Provenance> {
        self.get(key).map(|entry| entry.provenance)
    }

    /// A string option.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.value(key).as_str()
    }

    /// A boolean option.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.value(key).as_bool()
    }

    /// A numeric option widened to a double.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.value(key).as_f64()
    }

    /// A single-precision option.
    pub fn float(&self, key: &str) -> Option<f32> {
        match self.value(key) {
            ResolvedValue::Float(f) => Some(*f),
            other => other.as_f64().map(|d| d as f32),
        }
    }

    /// A duration option in milliseconds.
    pub fn millis(&self, key: &str) -> Option<u64> {
        self.value(key)
            .as_int()
            .map(|ms| u64::try_from(ms).unwrap_or(0))
    }

    /// A duration option, zero when absent.
    pub fn duration(&self, key: &str) -> Duration {
        Duration::from_millis(self.millis(key).unwrap_or(0))
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} options {{", self.operation)?;
        for (i, entry) in self.entries.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{} = {:?} ({:?})", sep, entry.path, entry.value, entry.provenance)?;
        }
        f.write_str(" }")
    }
}
