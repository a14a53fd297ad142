//! Dotted key paths.

use std::fmt;

/// A dotted key path such as `android.showDuration`, split into segments.
///
/// A key path always has at least one segment and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
    parents: Vec<&'a str>,
    leaf: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Split `path` on `.`.
    ///
    /// Returns `None` for an empty path or one containing an empty segment
    /// (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(path: &'a str) -> Option<Self> {
        let mut parents: Vec<&'a str> = path.split('.').collect();

        if parents.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        let leaf = parents.pop()?;
        Some(Self { parents, leaf })
    }

    /// The final segment.
    pub fn leaf(&self) -> &'a str {
        self.leaf
    }

    /// Every segment before the leaf; empty for a single-segment path.
    pub fn parents(&self) -> &[&'a str] {
        &self.parents
    }

    /// All segments, leaf last.
    pub fn segments(&self) -> Vec<&'a str> {
        let mut segments = self.parents.clone();
        segments.push(self.leaf);
        segments
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for parent in &self.parents {
            write!(f, "{}.", parent)?;
        }
        f.write_str(self.leaf)
    }
}
