//! Platform-aware key path resolution.

use super::{KeyPath, ResolvedValue, ValueType};
use crate::sources::ConfigTree;

/// The platform prefix used when none is configured.
pub const DEFAULT_PLATFORM_PREFIX: &str = "android";

/// Resolves dotted key paths against a [`ConfigTree`], preferring
/// platform-specific overrides.
///
/// Two config shapes are supported without the caller knowing which one is in
/// use:
///
/// ```text
/// SplashScreen: { android: { showDuration: 500 } }   // nested platform object
/// SplashScreen: { androidShowDuration: 500 }          // flat prefixed key
/// ```
///
/// For a key whose leaf does not start with the prefix (`showDuration`), the
/// nested platform object is probed first (`android.showDuration`), then the
/// literal path. For a key whose leaf does start with the prefix and has more
/// after it (`androidSpinnerStyle`), the prefix is split off, the next
/// character lower-cased, and `android.spinnerStyle` is probed before the
/// literal path.
///
/// Resolution is total: missing nodes, intermediate scalars and type
/// mismatches all yield [`ResolvedValue::Absent`].
///
/// # Examples
///
/// ```rust
/// use splash_lifecycle::resolve::{KeyPathResolver, ResolvedValue, ValueType};
/// use splash_lifecycle::sources::ConfigTree;
/// use serde_json::json;
///
/// let resolver = KeyPathResolver::default();
/// let tree = ConfigTree::from_json(json!({
///     "showDuration": 700,
///     "android": { "showDuration": 500 }
/// }));
///
/// assert_eq!(
///     resolver.resolve(&tree, "showDuration", ValueType::Int),
///     ResolvedValue::Int(500)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPathResolver {
    prefix: String,
}

impl KeyPathResolver {
    /// Create a resolver for the given platform prefix (e.g. `"android"`, `"ios"`).
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The platform prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The flat platform-specific key for `suffix`, e.g. `SpinnerStyle` ->
    /// `androidSpinnerStyle`.
    pub fn platform_key(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }

    /// Resolve `key_path` in `source` as `ty`.
    pub fn resolve(&self, source: &ConfigTree, key_path: &str, ty: ValueType) -> ResolvedValue {
        let Some(path) = KeyPath::parse(key_path) else {
            return ResolvedValue::Absent;
        };

        if self.prefix.is_empty() {
            return lookup(source, &path.segments(), ty);
        }

        let leaf = path.leaf();

        if !leaf.starts_with(self.prefix.as_str()) {
            let mut nested = Vec::with_capacity(path.parents().len() + 2);
            nested.push(self.prefix.as_str());
            nested.extend(path.segments());

            let value = lookup(source, &nested, ty);
            if !value.is_absent() {
                return value;
            }
        } else if leaf.len() > self.prefix.len() {
            let suffix = decapitalize(&leaf[self.prefix.len()..]);
            let mut nested = Vec::with_capacity(path.parents().len() + 2);
            nested.push(self.prefix.as_str());
            nested.extend_from_slice(path.parents());
            nested.push(suffix.as_str());

            let value = lookup(source, &nested, ty);
            if !value.is_absent() {
                return value;
            }
        }

        lookup(source, &path.segments(), ty)
    }
}

impl Default for KeyPathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_PREFIX)
    }
}

fn lookup(source: &ConfigTree, segments: &[&str], ty: ValueType) -> ResolvedValue {
    source
        .lookup(segments)
        .map(|node| ResolvedValue::convert(node, ty))
        .unwrap_or(ResolvedValue::Absent)
}

/// Lower-case the first character of `s`.
fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
