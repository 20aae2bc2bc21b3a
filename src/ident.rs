//! Namespaced resource identifiers.
//!
//! Everything the pack owns — sounds, recipes, list results — is addressed
//! by a `namespace:path` pair at the host boundary.

use std::fmt;

/// A namespaced identifier (`namespace:path`).
///
/// This is record-pack's own value type for the host's resource-location
/// concept, so downstream code can work with identifiers without depending
/// on any host types.
///
/// # Example
///
/// ```
/// use record_pack::ResourceId;
///
/// let id = ResourceId::new("customrecords", "recipes/stal.json");
/// assert_eq!(id.to_string(), "customrecords:recipes/stal.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    namespace: String,
    path: String,
}

impl ResourceId {
    /// Create a new identifier from a namespace and a path.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Get the namespace (e.g. `"customrecords"`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the path within the namespace (e.g. `"recipes/stal.json"`).
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
