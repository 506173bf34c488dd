//! Resources: the lanes of the timeline.

use serde::{Deserialize, Serialize};

use crate::event::Extensions;

/// A schedulable entity shown as one row of the timeline.
///
/// Resources are owned by the host. Timeline interactions never modify them;
/// the whole set is replaced when the host supplies a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Host-defined attributes, passed through untouched.
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Resource {
    /// Creates a resource with no extension attributes.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            extensions: Extensions::new(),
        }
    }

    /// Builder: attach an extension attribute.
    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extensions_are_flattened() {
        let resource = Resource::new("resource-1", "Room A").with_extension("floor", json!(3));
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(
            value,
            json!({"id": "resource-1", "title": "Room A", "floor": 3})
        );
    }

    #[test]
    fn unknown_keys_become_extensions() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "resource-2",
            "title": "Room B",
            "capacity": 12,
            "tags": ["av", "whiteboard"]
        }))
        .unwrap();

        assert_eq!(resource.id, "resource-2");
        assert_eq!(resource.extensions.len(), 2);
        assert_eq!(resource.extensions["capacity"], json!(12));
    }
}
