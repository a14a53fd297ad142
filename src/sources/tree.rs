//! Read-only configuration trees.

use crate::sources::ConfigMap;
use config::{Value, ValueKind};
use tracing::debug;

/// An immutable tree of string-keyed nodes (tables and scalars).
///
/// Two kinds of tree exist at runtime: the global tree, loaded once and
/// shared for the life of the process, and the call-scoped tree built from
/// the options of a single request.
///
/// # Examples
///
/// ```rust
/// use splash_lifecycle::sources::ConfigTree;
/// use serde_json::json;
///
/// let tree = ConfigTree::from_json(json!({ "android": { "showDuration": 500 } }));
/// assert!(tree.lookup(&["android", "showDuration"]).is_some());
/// assert!(tree.lookup(&["showDuration"]).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigTree {
    root: ConfigMap,
}

impl ConfigTree {
    /// Wrap an existing root table.
    pub fn new(root: ConfigMap) -> Self {
        Self { root }
    }

    /// A tree with no nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON value.
    ///
    /// Anything other than a JSON object yields an empty tree.
    pub fn from_json(value: serde_json::Value) -> Self {
        if !value.is_object() {
            if !value.is_null() {
                debug!("Ignoring non-object options: {}", value);
            }
            return Self::empty();
        }

        match serde_json::from_value::<ConfigMap>(value) {
            Ok(root) => Self { root },
            Err(e) => {
                debug!("Ignoring unreadable options: {}", e);
                Self::empty()
            }
        }
    }

    /// The root table.
    pub fn root(&self) -> &ConfigMap {
        &self.root
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk the tree along `segments`, returning the node at the end.
    ///
    /// Every segment except the last must name a table; an empty segment list
    /// never matches.
    pub fn lookup(&self, segments: &[&str]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut node = self.root.get(*first)?;

        for segment in rest {
            match &node.kind {
                ValueKind::Table(table) => node = table.get(*segment)?,
                _ => return None,
            }
        }

        Some(node)
    }

    /// The table at `segments` as its own tree, or an empty tree when the
    /// path is missing or does not name a table.
    pub fn subtree(&self, segments: &[&str]) -> Self {
        match self.lookup(segments).map(|node| &node.kind) {
            Some(ValueKind::Table(table)) => Self::new(table.clone()),
            _ => Self::empty(),
        }
    }

    /// A copy of this tree with the top-level `key` removed.
    pub fn without(&self, key: &str) -> Self {
        let mut root = self.root.clone();
        root.remove(key);
        Self { root }
    }
}

impl From<serde_json::Value> for ConfigTree {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(value)
    }
}

impl From<ConfigMap> for ConfigTree {
    fn from(root: ConfigMap) -> Self {
        Self::new(root)
    }
}
